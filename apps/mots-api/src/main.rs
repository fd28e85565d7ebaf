use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = mots_api::Args::parse();

	mots_api::run(args).await
}
