use std::io::{BufRead, Write};

use crate::{
    error::{Error, Result},
    generators::Generator,
};

/// Environment variable holding an optional RNG seed.
pub const SEED_ENV_VAR: &str = "MAZEWALK_SEED";

/// Everything needed to build one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u8,
    pub height: u8,
    pub generator: Generator,
    /// Seed for reproducible mazes. Fresh OS randomness when `None`.
    pub seed: Option<u64>,
}

impl Config {
    /// Parses `WIDTH HEIGHT [ALGORITHM] [--seed N]`, without the executable name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positional = Vec::new();
        let mut seed = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| Error::InvalidInput("--seed requires a value".to_string()))?;
                seed = Some(parse_seed(value.as_ref())?);
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = Some(parse_seed(value)?);
            } else {
                positional.push(arg.to_string());
            }
        }

        let (width, height) = match positional.as_slice() {
            [_, _, ..] => parse_dimensions(&positional[..2].join(" "))?,
            _ => {
                return Err(Error::InvalidInput(
                    "expected maze dimensions: WIDTH HEIGHT [ALGORITHM]".to_string(),
                ));
            }
        };
        let generator = match positional.get(2) {
            Some(name) => name.parse()?,
            None => Generator::default(),
        };
        if positional.len() > 3 {
            return Err(Error::InvalidInput(format!(
                "unexpected argument {:?}",
                positional[3]
            )));
        }

        Ok(Config {
            width,
            height,
            generator,
            seed,
        })
    }

    /// Asks for dimensions and an algorithm on `input`, writing prompts to `output`.
    /// An empty algorithm answer picks the default.
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        let mut line = String::new();
        writeln!(
            output,
            "Enter maze dimensions (width height). Maximum size is 255x255:"
        )?;
        input.read_line(&mut line)?;
        let (width, height) = parse_dimensions(&line)?;

        writeln!(output, "Select maze generation algorithm:")?;
        for (i, generator) in Generator::ALL.iter().enumerate() {
            let marker = if *generator == Generator::default() {
                " (default)"
            } else {
                ""
            };
            writeln!(output, "{}. {}{}", i + 1, generator, marker)?;
        }
        line.clear();
        input.read_line(&mut line)?;
        let generator = match line.trim() {
            "" => Generator::default(),
            choice => choice.parse()?,
        };

        Ok(Config {
            width,
            height,
            generator,
            seed: None,
        })
    }

    /// Fills in the seed from [`SEED_ENV_VAR`] when none was given explicitly.
    pub fn with_env_seed(mut self, value: Option<String>) -> Result<Self> {
        if let (None, Some(value)) = (self.seed, value) {
            self.seed = Some(parse_seed(&value)?);
        }
        Ok(self)
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("seed must be an unsigned integer, got {:?}", value)))
}

/// Parses two whitespace-separated dimensions, each between 1 and 255.
fn parse_dimensions(input: &str) -> Result<(u8, u8)> {
    let dims = input
        .split_whitespace()
        .take(2)
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| Error::InvalidInput(format!("{:?} is not a number between 1 and 255", s)))
        })
        .collect::<Result<Vec<_>>>()?;

    match dims.as_slice() {
        [width, height] if *width > 0 && *height > 0 => Ok((*width, *height)),
        [width, height] => Err(Error::InvalidDimensions {
            width: *width,
            height: *height,
        }),
        _ => Err(Error::InvalidInput(
            "please enter two numbers for width and height".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let config = Config::from_args(["10", "20"]).unwrap();
        assert_eq!(
            config,
            Config {
                width: 10,
                height: 20,
                generator: Generator::Wanderers,
                seed: None,
            }
        );

        let config = Config::from_args(["3", "4", "connect", "--seed", "99"]).unwrap();
        assert_eq!(config.generator, Generator::CellConnect);
        assert_eq!(config.seed, Some(99));

        let config = Config::from_args(["--seed=7", "1", "1"]).unwrap();
        assert_eq!((config.width, config.height, config.seed), (1, 1, Some(7)));
    }

    #[test]
    fn test_from_args_errors() {
        assert!(matches!(
            Config::from_args(["10"]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Config::from_args(["0", "5"]),
            Err(Error::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            Config::from_args(["256", "5"]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Config::from_args(["5", "5", "prim"]),
            Err(Error::UnknownGenerator(_))
        ));
        assert!(matches!(
            Config::from_args(["5", "5", "--seed"]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Config::from_args(["5", "5", "walk", "extra"]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_prompt() {
        let mut input = "12 8\n2\n".as_bytes();
        let mut output = Vec::new();
        let config = Config::prompt(&mut input, &mut output).unwrap();
        assert_eq!((config.width, config.height), (12, 8));
        assert_eq!(config.generator, Generator::CellConnect);

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Maximum size is 255x255"));
        assert!(prompts.contains("1. Randomized Walk (Wanderers) (default)"));
    }

    #[test]
    fn test_prompt_defaults_generator() {
        let mut input = "5 5\n\n".as_bytes();
        let config = Config::prompt(&mut input, &mut std::io::sink()).unwrap();
        assert_eq!(config.generator, Generator::Wanderers);
    }

    #[test]
    fn test_prompt_rejects_garbage() {
        let mut input = "five five\n".as_bytes();
        assert!(matches!(
            Config::prompt(&mut input, &mut std::io::sink()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_env_seed() {
        let config = Config::from_args(["4", "4"]).unwrap();
        let config = config.with_env_seed(Some("123".to_string())).unwrap();
        assert_eq!(config.seed, Some(123));

        // An explicit seed wins
        let config = Config::from_args(["4", "4", "--seed", "1"]).unwrap();
        let config = config.with_env_seed(Some("123".to_string())).unwrap();
        assert_eq!(config.seed, Some(1));

        let config = Config::from_args(["4", "4"]).unwrap();
        assert!(config.with_env_seed(Some("abc".to_string())).is_err());
    }
}
