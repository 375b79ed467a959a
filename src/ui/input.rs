use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    Quit,
}

/// Parse one line of console input: `q` to quit, or `row,col`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount(tokens.len()));
    }

    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    Ok(Command::Place {
        row: parse(tokens[0])?,
        col: parse(tokens[1])?,
    })
}
