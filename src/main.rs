use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, error};

use recipe_catalog::shell::{self, Flow};
use recipe_catalog::{load_config, Catalog, FileStorage};

#[derive(Parser, Debug)]
#[command(name = "recipe-catalog")]
#[command(about = "Keep, edit and search your recipes")]
#[command(version)]
struct Cli {
    /// Storage file (overrides the configured storage_path)
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Configuration file (defaults to an optional config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }
    debug!("{:#?}", config);

    let storage = FileStorage::open(&config.storage_path)?;
    let mut catalog = Catalog::open(storage, &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!("Каталог рецептов");
    println!("{}", recipe_catalog::view::render_list(&catalog.visible()));
    println!("\n{}", shell::HELP);

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match shell::parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let mut confirm = |prompt: &str| {
            print!("{} [y/N] ", prompt);
            if stdout.flush().is_err() {
                return false;
            }
            match lines.next() {
                Some(Ok(answer)) => shell::is_yes(&answer),
                _ => false,
            }
        };

        match shell::execute(&mut catalog, command, &mut confirm) {
            Ok(Flow::Continue(output)) => println!("{}", output),
            Ok(Flow::Quit) => break,
            Err(e) => {
                error!("{}", e);
                println!("{}", e);
            }
        }
    }

    Ok(())
}
