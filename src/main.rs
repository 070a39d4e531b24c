#![doc = include_str!("../README.md")]

mod bill;
mod cli;
mod comparison;
mod consumption;
mod contract;
mod contracts_file;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => args.run()?,
        Command::Template(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
