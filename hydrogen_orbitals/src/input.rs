//! Console input of quantum numbers
//!
//! [`InputMachine`] holds the validation logic as a state machine so it can
//! be driven line by line; [`read_request`] connects it to a reader and a
//! writer. A rejected value re-prompts the same field, keeping the values
//! already accepted.

use crate::quantum::{OrbitalRequest, QuantumState, MAX_N};
use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Typing this at any prompt ends the session
pub const EXIT_KEYWORD: &str = "exit";

/// The value a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    N,
    L,
    M,
    Scale,
}

impl Field {
    pub fn prompt(self) -> &'static str {
        match self {
            Field::N => "n - principal quantum number",
            Field::L => "l - secondary quantum number",
            Field::M => "m - magnetic quantum number",
            Field::Scale => "a0_scale - Bohr radius scale factor",
        }
    }

    fn parse_hint(self) -> &'static str {
        match self {
            Field::N => "n must be a natural number greater than 0",
            Field::L => "l must be an integer with 0 <= l < n",
            Field::M => "m must be an integer in the range [-l, l]",
            Field::Scale => "a0_scale must be a positive number",
        }
    }

    fn range_hint(self) -> String {
        match self {
            Field::N => format!("n cannot be less than 1 or greater than {MAX_N}"),
            Field::L => "l cannot be less than 0 or greater than or equal to n".into(),
            Field::M => "m cannot be less than -l or greater than l".into(),
            Field::Scale => "the scale factor must be a finite number greater than 0".into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Field::N => "n",
            Field::L => "l",
            Field::M => "m",
            Field::Scale => "a0_scale",
        };
        f.write_str(symbol)
    }
}

/// A rejected line. Both kinds are recovered by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{} (got {input:?})", .field.parse_hint())]
    Parse { field: Field, input: String },

    #[error("{} (got {input})", .field.range_hint())]
    Range { field: Field, input: String },
}

impl InputError {
    pub fn field(&self) -> Field {
        match self {
            InputError::Parse { field, .. } | InputError::Range { field, .. } => *field,
        }
    }
}

/// Progress through the four prompts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    AskN,
    AskL { n: u32 },
    AskM { n: u32, l: u32 },
    AskScale { state: QuantumState },
    Done(OrbitalRequest),
    Aborted,
}

/// Line-driven validator for one orbital request
#[derive(Debug, Clone)]
pub struct InputMachine {
    state: InputState,
}

impl Default for InputMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMachine {
    pub fn new() -> Self {
        Self {
            state: InputState::AskN,
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    /// Field the next line will be read as, or `None` once finished
    pub fn field(&self) -> Option<Field> {
        match self.state {
            InputState::AskN => Some(Field::N),
            InputState::AskL { .. } => Some(Field::L),
            InputState::AskM { .. } => Some(Field::M),
            InputState::AskScale { .. } => Some(Field::Scale),
            InputState::Done(_) | InputState::Aborted => None,
        }
    }

    /// End the session, as if the exit keyword had been typed
    pub fn abort(&mut self) {
        self.state = InputState::Aborted;
    }

    /// Consume one line of input.
    ///
    /// On error the state is unchanged. Lines fed after `Done` or `Aborted`
    /// are ignored.
    pub fn feed(&mut self, line: &str) -> Result<InputState, InputError> {
        let text = line.trim();
        let Some(field) = self.field() else {
            return Ok(self.state);
        };

        if text == EXIT_KEYWORD {
            self.state = InputState::Aborted;
            return Ok(self.state);
        }

        let parse_error = || InputError::Parse {
            field,
            input: text.to_string(),
        };
        let range_error = || InputError::Range {
            field,
            input: text.to_string(),
        };

        self.state = match self.state {
            InputState::AskN => {
                let n: i64 = text.parse().map_err(|_| parse_error())?;
                let n = u32::try_from(n)
                    .ok()
                    .filter(|n| (1..=MAX_N).contains(n))
                    .ok_or_else(range_error)?;
                InputState::AskL { n }
            }
            InputState::AskL { n } => {
                let l: i64 = text.parse().map_err(|_| parse_error())?;
                let l = u32::try_from(l)
                    .ok()
                    .filter(|&l| l < n)
                    .ok_or_else(range_error)?;
                InputState::AskM { n, l }
            }
            InputState::AskM { n, l } => {
                let m: i64 = text.parse().map_err(|_| parse_error())?;
                let state = i32::try_from(m)
                    .ok()
                    .and_then(|m| QuantumState::new(n, l, m))
                    .ok_or_else(range_error)?;
                InputState::AskScale { state }
            }
            InputState::AskScale { state } => {
                let scale: f64 = text.parse().map_err(|_| parse_error())?;
                if !(scale.is_finite() && scale > 0.0) {
                    return Err(range_error());
                }
                InputState::Done(OrbitalRequest { state, scale })
            }
            InputState::Done(_) | InputState::Aborted => self.state,
        };

        Ok(self.state)
    }
}

/// Prompt on `output` and read lines from `input` until a request is complete.
///
/// Returns `None` when the user types the exit keyword or input ends.
pub fn read_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<OrbitalRequest>> {
    let mut machine = InputMachine::new();

    writeln!(
        output,
        "Enter the quantum numbers to visualize a hydrogen orbital, or type \"{EXIT_KEYWORD}\" to quit:\n"
    )?;

    loop {
        let field = match machine.state() {
            InputState::Done(request) => return Ok(Some(request)),
            InputState::Aborted => return Ok(None),
            _ => match machine.field() {
                Some(field) => field,
                None => return Ok(None),
            },
        };

        write!(output, "{}: ", field.prompt())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Input closed while asking for {field}");
            machine.abort();
            continue;
        }

        if let Err(err) = machine.feed(&line) {
            log::debug!("Rejected {}: {err}", err.field());
            writeln!(output, "{err}\n")?;
        }
    }
}
