use anyhow::Result;
use wplot::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
