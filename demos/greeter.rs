use switchyard::{ArgumentParser, HelpPrinter, SwitchRegistry, SwitchSpec};

fn main() {
    let mut switches = SwitchRegistry::new();
    switches.add(
        SwitchSpec::new("n")
            .unwrap()
            .long("name")
            .help("Who to greet.")
            .required()
            .label("name"),
    );
    switches.add(
        SwitchSpec::new("s")
            .unwrap()
            .long("shout")
            .help("Greet loudly."),
    );
    switches.add(SwitchSpec::new("h").unwrap().long("help").help("Show this help message and exit."));

    let mut parser = ArgumentParser::from_env(switches);

    if let Err(error) = parser.parse() {
        if !parser.is_parsed("h") {
            eprintln!("{error}");
        }

        HelpPrinter::new("greeter", parser.switches())
            .unwrap()
            .header("Greets someone.")
            .print();
        std::process::exit(if parser.is_parsed("h") { 0 } else { 1 });
    }

    let greeting = format!("Hello, {}!", parser.get_value("name").unwrap_or_default());

    if parser.is_parsed("shout") {
        println!("{}", greeting.to_uppercase());
    } else {
        println!("{greeting}");
    }
}
