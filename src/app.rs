use std::io::{BufRead, Write};

use crate::{config::Config, error::Result, generators::generate_maze, maze::Maze, renderer};

/// Builds and draws one maze.
///
/// Reads the configuration from `args` (without the executable name), or asks
/// for it on `input` when there are none. `env_seed` is the raw value of
/// [`SEED_ENV_VAR`](crate::config::SEED_ENV_VAR), if set.
pub fn run<R: BufRead, W: Write>(
    args: &[String],
    env_seed: Option<String>,
    input: &mut R,
    output: &mut W,
    is_terminal: bool,
) -> Result<()> {
    let config = if args.is_empty() {
        Config::prompt(input, output)?
    } else {
        Config::from_args(args)?
    };
    let config = config.with_env_seed(env_seed)?;
    tracing::info!("[app] {:?}", config);

    let mut maze = Maze::new(config.width, config.height)?;
    generate_maze(&mut maze, config.generator, config.seed);

    renderer::draw(&maze, output, is_terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_rejects_invalid_dimensions() {
        let mut output = Vec::new();
        let result = run(
            &args(&["0", "3"]),
            None,
            &mut std::io::empty(),
            &mut output,
            false,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions {
                width: 0,
                height: 3
            })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_rejects_bad_env_seed() {
        let result = run(
            &args(&["3", "2"]),
            Some("not-a-seed".to_string()),
            &mut std::io::empty(),
            &mut std::io::sink(),
            false,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_run_draws_plain_maze_when_redirected() {
        let mut output = Vec::new();
        run(
            &args(&["3", "2", "--seed", "1"]),
            None,
            &mut std::io::empty(),
            &mut output,
            false,
        )
        .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("+---+---+---+\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_run_prompts_without_args() {
        let mut input = "2 2\n1\n".as_bytes();
        let mut output = Vec::new();
        run(&[], Some("4".to_string()), &mut input, &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Enter maze dimensions"));
        assert!(text.ends_with("+---+---+\n"));
    }
}
