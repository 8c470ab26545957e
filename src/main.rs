use std::env;
use std::fs;
use std::process;

use fretboard::FretboardConfig;

fn usage() -> ! {
    eprintln!("Usage: fretboard <key> <scale> [--config <file.yaml>] [--frets <n>]");
    eprintln!("       fretboard --list-scales [--config <file.yaml>]");
    eprintln!();
    eprintln!("Keys: Ab A Bb B C Db D Eb E F Gb G");
    process::exit(1);
}

fn load_config(path: Option<&str>) -> FretboardConfig {
    let Some(path) = path else {
        return FretboardConfig::default();
    };
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading config '{}': {}", path, e);
            process::exit(1);
        }
    };
    match serde_yaml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error parsing config '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut key: Option<&str> = None;
    let mut scale: Option<&str> = None;
    let mut config_path: Option<&str> = None;
    let mut frets: Option<&str> = None;
    let mut list_scales = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(args.get(i).map(String::as_str).unwrap_or_else(|| usage()));
            }
            "--frets" => {
                i += 1;
                frets = Some(args.get(i).map(String::as_str).unwrap_or_else(|| usage()));
            }
            "--list-scales" => list_scales = true,
            arg if key.is_none() => key = Some(arg),
            arg if scale.is_none() => scale = Some(arg),
            _ => usage(),
        }
        i += 1;
    }

    let mut config = load_config(config_path);

    if let Some(frets) = frets {
        match frets.parse::<u8>() {
            Ok(n) if n >= 1 => config.layout.num_frets = n,
            _ => {
                eprintln!("Error: --frets expects an integer >= 1, got '{}'", frets);
                process::exit(1);
            }
        }
    }

    if list_scales {
        for name in config.scales.names() {
            println!("{}", name);
        }
        return;
    }

    let (Some(key), Some(scale)) = (key, scale) else {
        usage();
    };

    let map = match fretboard::map_scale(key, scale, &config) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match serde_yaml::to_string(&map) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}
