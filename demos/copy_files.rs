use switchyard::{Arity, ArgumentParser, HelpPrinter, ParseError, SwitchRegistry, SwitchSpec};

fn declare() -> Result<SwitchRegistry, ParseError> {
    let mut switches = SwitchRegistry::new();
    switches.add(
        SwitchSpec::new("s")?
            .long("sources")
            .help("The files to copy.")
            .required()
            .takes(Arity::AtLeastOne)
            .label("file"),
    );
    switches.add(
        SwitchSpec::new("d")?
            .long("destination")
            .help("The directory to copy into.")
            .required()
            .label("directory"),
    );
    switches.add(
        SwitchSpec::new("r")?
            .long("resize")
            .help("Resize images while copying.")
            .labels(["width", "height"]),
    );
    switches.add(SwitchSpec::new("v")?.long("verbose"));
    Ok(switches)
}

fn main() {
    let switches = match declare() {
        Ok(switches) => switches,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    let mut parser = ArgumentParser::from_env(switches);

    if let Err(error) = parser.parse() {
        eprintln!("Parse error: {error}");
        HelpPrinter::new("copy_files", parser.switches())
            .unwrap()
            .footer("Greedy switches take every value up to the next switch.")
            .print();
        std::process::exit(1);
    }

    let sources = parser.get_values("sources").unwrap_or_default();
    let destination = parser.get_value("destination").unwrap_or_default();

    for source in sources {
        if parser.is_parsed("v") {
            println!("Copying '{source}' into '{destination}'.");
        }
    }

    if let (Some(width), Some(height)) = (parser.get_value_at("r", 1), parser.get_value_at("r", 2)) {
        println!("Resizing to {width}x{height}.");
    }

    println!("Copied {} file(s).", sources.len());
}
