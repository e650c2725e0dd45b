use std::collections::HashMap;
use std::env;
use std::fs;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub simulation: HashMap<String, u64>,
}

fn read_config_file() -> Result<ConfigFile, serde_json::Error> {
    let file_path = "config.json";
    let fallback_file_path = "../config.json";
    let config_contents = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(_) => {
            println!("No configuration file in working directory, trying parent...");
            fs::read_to_string(fallback_file_path).unwrap()
        },
    };
    serde_json::from_str(&config_contents)
}

fn parse_env_args(mut riders: u32, mut tick_ms: u64) -> (u32, u64, Option<u64>, bool) {
    let (mut seed, mut manual) = (None, false);

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--riders" => {
                riders = match arg_pair[1].parse::<u32>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("riders {} is not a number, skipping...", arg_pair[1]);
                        riders
                    },
                };
            },
            "--tick-ms" => {
                tick_ms = match arg_pair[1].parse::<u64>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("tick-ms {} is not a number, skipping...", arg_pair[1]);
                        tick_ms
                    },
                };
            },
            "--seed" => {
                seed = match arg_pair[1].parse::<u64>() {
                    Ok(num) => Some(num),
                    Err(_) => {
                        println!("seed {} is not a number, skipping...", arg_pair[1]);
                        seed
                    },
                };
            },
            "--manual" => {
                manual = match arg_pair[1].parse::<bool>() {
                    Ok(flag) => flag,
                    Err(_) => {
                        println!("manual {} is not a bool, skipping...", arg_pair[1]);
                        manual
                    },
                };
            },
            _ => {},
        }
    }
    (riders, tick_ms, seed, manual)
}

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub riders: u32,
    pub tick_ms: u64,
    pub seed: Option<u64>,
    pub manual: bool,
}

impl SimulatorConfig {
    pub fn get() -> Self {
        let config_file = read_config_file().unwrap();
        let (riders, tick_ms, seed, manual) = parse_env_args(
            config_file.simulation["riders"] as u32,
            config_file.simulation["tick_ms"],
        );

        SimulatorConfig {
            riders: riders,
            tick_ms: tick_ms,
            seed: seed,
            manual: manual,
        }
    }
}
