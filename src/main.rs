use course_player::{banner, build, config, constant, init_tracing, serve};

#[tokio::main]
async fn main() -> Result<(), color_eyre::Report> {
    let config = config::Config::default();
    init_tracing(&config.log)?;
    tracing::info!(server_version = constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await?;
    let address = listener.local_addr()?;
    tracing::info!(%address, "listening");
    println!("{}", banner::render(address, &config.folder.root));

    serve(listener, build(&config)).await?;
    Ok(())
}
