use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::PixelvoteError;
use crate::game::seed::seed_games;
use crate::server::run_server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(version, about)]
pub struct Commandline {
	#[arg(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[command(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Debug, Default, PartialEq, Eq)]
pub enum BaseCommand {
	/// Run the pixelvote server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
	/// Replace all games with the sample catalogue
	Seed,
}

impl Commandline {
	pub async fn run(self) -> Result<(), PixelvoteError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		match self.command.unwrap_or_default() {
			BaseCommand::Run => {
				let application_context = start(configuration).await?;
				info!("Starting server.");
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:#?}"),
			BaseCommand::Seed => {
				let application_context = start(configuration).await?;
				let games = seed_games(application_context.store.games()).await?;
				info!("Seeded {} games.", games.len());
			}
		}
		Ok(())
	}
}

/// Sets up logging before opening the store so that a fallback to memory shows up in the log.
async fn start(configuration: Configuration) -> Result<ApplicationContext, PixelvoteError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_new(&configuration.log_filters)?)
		.init();

	Ok(ApplicationContext::new(configuration).await?)
}
