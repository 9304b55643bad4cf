use std::str::FromStr;

use anyhow::{bail, ensure, Context, Error};
use hashi::Location;

pub const HELP: &str = "commands: c X Y (click)  b X1 Y1 X2 Y2 (bridge)  u (undo)  r (reset)  s (solve)  h (help)  q (quit)";

/// One line of player input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Click(Location),
    Bridge(Location, Location),
    Undo,
    Reset,
    Solve,
    Help,
    Quit,
}

fn coordinates<const N: usize>(args: &[&str]) -> Result<[usize; N], Error> {
    ensure!(args.len() == N, "expected {N} coordinates, got {}", args.len());

    let mut out = [0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().with_context(|| format!("bad coordinate {arg:?}"))?;
    }
    Ok(out)
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = line.split_whitespace().collect::<Vec<_>>();
        let Some((verb, args)) = words.split_first() else {
            bail!("empty command; {HELP}");
        };

        let no_args = |command: Command| -> Result<Command, Error> {
            ensure!(args.is_empty(), "{verb} takes no arguments");
            Ok(command)
        };

        match verb.to_ascii_lowercase().as_str() {
            "c" | "click" => {
                let [x, y] = coordinates::<2>(args)?;
                Ok(Self::Click(Location(x, y)))
            }
            "b" | "bridge" => {
                let [x1, y1, x2, y2] = coordinates::<4>(args)?;
                Ok(Self::Bridge(Location(x1, y1), Location(x2, y2)))
            }
            "u" | "undo" => no_args(Self::Undo),
            "r" | "reset" => no_args(Self::Reset),
            "s" | "solve" => no_args(Self::Solve),
            "h" | "help" | "?" => no_args(Self::Help),
            "q" | "quit" | "exit" => no_args(Self::Quit),
            _ => bail!("unknown command {verb:?}; {HELP}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashi::Location;

    use super::Command;

    #[test]
    fn parses_actions() {
        assert_eq!("c 3 0".parse::<Command>().unwrap(), Command::Click(Location(3, 0)));
        assert_eq!(" b 0 2  3 2 ".parse::<Command>().unwrap(), Command::Bridge(Location(0, 2), Location(3, 2)));
        assert_eq!("undo".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!("R".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("s".parse::<Command>().unwrap(), Command::Solve);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("".parse::<Command>().is_err());
        assert!("c 1".parse::<Command>().is_err());
        assert!("c -1 0".parse::<Command>().is_err());
        assert!("b 1 2 3".parse::<Command>().is_err());
        assert!("u 1".parse::<Command>().is_err());
        assert!("jump".parse::<Command>().is_err());
    }
}
