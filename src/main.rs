use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tailmerge::{export_css, merge, short_name};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if !config.classes.is_empty() {
        if config.emit_name {
            println!("{}", short_name(&config.classes));
        } else {
            println!("{}", merge(&config.classes));
        }
    }

    if let Some(path) = &config.export {
        if let Err(err) = export_css(path) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    classes: String,
    emit_name: bool,
    export: Option<PathBuf>,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut classes: Vec<String> = Vec::new();
    let mut emit_name = false;
    let mut export = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tailmerge {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-n" | "--name" => emit_name = true,
            "--export" => {
                let value = args.next().ok_or_else(|| "error: --export expects a path".to_string())?;
                export = Some(PathBuf::from(value));
            }
            "--" => {
                classes.extend(args.by_ref());
            }
            // single-dash tokens stay classes: negative utilities like -mt-2
            _ if arg.starts_with("--") => {
                return Err(format!("error: unknown option {arg:?} (try --help)"));
            }
            _ => classes.push(arg),
        }
    }

    if classes.is_empty() && !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|err| format!("error reading stdin: {err}"))?;
        classes.extend(buf.split_whitespace().map(str::to_string));
    }

    if classes.is_empty() && export.is_none() {
        return Err("error: no classes given (try --help)".to_string());
    }

    Ok(CliConfig { classes: classes.join(" "), emit_name, export })
}

fn print_help() {
    println!(
        "tailmerge {}

Merge utility class lists, resolving conflicts so the last declaration of
each visual property wins.

Usage: tailmerge [OPTIONS] [CLASSES]...
       echo \"px-2 p-4\" | tailmerge

Options:
  -n, --name           print the short generated class name instead of the
                       merged list
      --export <PATH>  splice the registered class rules into <PATH> between
                       the tailmerge markers
  -h, --help           print this help
  -V, --version        print the version",
        env!("CARGO_PKG_VERSION")
    );
}
