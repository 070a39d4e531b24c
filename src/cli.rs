mod compare;
mod consumption;
mod template;

use clap::{Parser, Subcommand};

pub use self::{compare::CompareArgs, template::TemplateArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the yearly costs of every contract and compare them.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Write a contracts file with the default prices to start from.
    #[clap(name = "template")]
    Template(TemplateArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_args() {
        Args::command().debug_assert();
    }
}
