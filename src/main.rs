// primsize: values and sizes of primitive data types

use std::io;
use std::process;

use primsize::config::{usage, Options};
use primsize::console::Console;
use primsize::demo::Demo;
use primsize::ui::{run_inspector, App};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("primsize");

    let options = match Options::parse(args.iter().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(program_name));
            process::exit(1);
        }
    };

    if options.help {
        eprintln!("{}", usage(program_name));
        return Ok(());
    }

    let demo = Demo::new()?;
    if options.verbose {
        eprintln!(
            "Declared {} locals in {}() ({} bytes).",
            demo.frame().len(),
            demo.frame().function_name,
            demo.frame().total_size()
        );
    }

    let mut console = Console::new();
    demo.run(&mut console)?;
    console.flush_to(&mut io::stdout().lock())?;

    if options.verbose {
        eprintln!("Printed {} lines.", console.get_output().len());
    }

    if !options.inspect {
        return Ok(());
    }

    if options.verbose {
        eprintln!("Opening inspector...");
    }

    let mut app = App::new(demo, console);
    run_inspector(&mut app)?;

    Ok(())
}
