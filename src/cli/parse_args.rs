use dpll_sat::config::{Config, PolarityLean, PoolRestoration};

use crate::config::{CliConfig, ConfigError};

/// Parse CLI arguments to a [Config] struct or a [CliConfig] struct.
///
/// Options take the form `--name` or `--name=value`, and any other argument is read as the seed.
pub(super) fn parse_args(
    args: &[String],
    cli_options: &mut CliConfig,
) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    'arg_examination: for arg in args.iter().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--verify") => {
                let value = match split.next() {
                    None => true,
                    Some(request) => match request.parse::<bool>() {
                        Ok(value) => value,
                        Err(_) => {
                            return Err(ConfigError::NonSpecific(
                                "verify requires a value of either true or false".to_string(),
                            ))
                        }
                    },
                };

                if value {
                    println!("c A model will be checked against the formula, if one exists.");
                }
                cli_options.verify = value;
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, an error is returned.
            //
            Some("--polarity_lean") => {
                let (min, max) = cfg.polarity_lean.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<PolarityLean>() {
                        if cfg.polarity_lean.set(value) {
                            println!("c polarity_lean set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "polarity_lean requires a value between {min} and {max}"
                )));
            }

            Some("--pool_restoration") => {
                let (min, max) = cfg.pool_restoration.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<PoolRestoration>() {
                        if cfg.pool_restoration.set(value) {
                            println!("c pool_restoration set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "pool_restoration requires a value of either {min} or {max}"
                )));
            }

            Some("--preprocessing") => {
                let value = match split.next() {
                    None => true,
                    Some(request) => match request.parse::<bool>() {
                        Ok(value) => value,
                        Err(_) => {
                            return Err(ConfigError::NonSpecific(
                                "preprocessing requires a value of either true or false"
                                    .to_string(),
                            ))
                        }
                    },
                };

                println!("c preprocessing set to: {value}");
                cfg.preprocessing.value = value;
            }

            Some("--stack_mb") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if 1 <= value && value <= 1 << 16 {
                            println!("c stack_mb set to: {value}");
                            cli_options.stack_mb = value;
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "stack_mb requires a value between 1 and {}",
                    1 << 16
                )));
            }

            Some(option) if option.starts_with("--") => {
                return Err(ConfigError::NonSpecific(format!(
                    "unrecognised option {option}"
                )));
            }

            _ => match (cli_options.seed, arg.parse::<u64>()) {
                (None, Ok(seed)) => cli_options.seed = Some(seed),
                (Some(_), _) => {
                    return Err(ConfigError::NonSpecific(format!(
                        "unexpected argument {arg}, a seed has already been given"
                    )))
                }
                (None, Err(_)) => {
                    return Err(ConfigError::NonSpecific(format!(
                        "the seed must be an unsigned integer, found {arg}"
                    )))
                }
            },
        }
    }

    Ok(cfg)
}
