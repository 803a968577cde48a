fn main() {
    env_logger::init();

    let (path, config) = match dotmatrix::parse_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(2);
        }
    };

    let result = dotmatrix::load_image(&path).and_then(|image| {
        log::info!("Running image path: '{}'", path);
        dotmatrix::run(&config, &image)
    });

    match result {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}
