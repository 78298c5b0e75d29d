use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, registry::Registry, EnvFilter};
use tracing_tree;

mod cli;
mod demo;
mod dump;
mod store;

fn init_logger() {
    let filter = EnvFilter::from_default_env();

    let layer = tracing_tree::HierarchicalLayer::default()
        .with_writer(std::io::stdout)
        .with_indent_lines(true)
        .with_indent_amount(2)
        .with_verbose_entry(false)
        .with_verbose_exit(false)
        .with_targets(true);

    let subscriber = Registry::default().with(layer).with(filter);

    tracing::subscriber::set_global_default(subscriber).unwrap();
}

fn main() -> ExitCode {
    init_logger();

    info!("parsing command line arguments");
    let cli = cli::Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("evflag: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: cli::Commands) -> Result<(), store::Error> {
    match command {
        cli::Commands::Init(settings) => {
            let field = store::Field::new(settings.words);
            store::save(&settings.path, &field)
        }
        cli::Commands::Set(args) => {
            let mut field = store::load(&args.path)?;
            field.set(args.flag)?;
            store::save(&args.path, &field)
        }
        cli::Commands::Clear(args) => {
            let mut field = store::load(&args.path)?;
            field.clear(args.flag)?;
            store::save(&args.path, &field)
        }
        cli::Commands::Test(args) => {
            let field = store::load(&args.path)?;
            let raised = field.test(args.flag)?;
            println!("{}", if raised { "set" } else { "clear" });
            Ok(())
        }
        cli::Commands::Dump(target) => {
            let field = store::load(&target.path)?;
            println!("{}", dump::render(&field, target.plain));
            Ok(())
        }
        cli::Commands::Demo(target) => demo::run(&target.path, target.plain),
    }
}
