//! Line-oriented prompts with bounded re-prompting on invalid input.

use crate::error::Error;
use chrono::{Local, NaiveDate};
use crossterm::style::Stylize;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Two decimal places, with halves rounded away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    max_attempts: u32,
    currency: String,
    color: bool,
    fixed_today: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, max_attempts: u32) -> Self {
        Self {
            reader,
            writer,
            max_attempts: max_attempts.max(1),
            currency: "₹".to_string(),
            color: false,
            fixed_today: None,
        }
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Formats an amount with the currency symbol and two decimals.
    pub fn money(&self, amount: Decimal) -> String {
        format!("{}{}", self.currency, format_amount(amount))
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", message.green())
        } else {
            writeln!(self.writer, "{message}")
        }
    }

    pub fn failure(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", message.red())
        } else {
            writeln!(self.writer, "{message}")
        }
    }

    /// Reads one line without its line ending.
    pub fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, Error> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        self.read_line()
    }

    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, Error> {
        self.prompt_parsed(prompt, "Invalid input. Please enter a number.", |input| {
            input.parse().ok()
        })
    }

    pub fn prompt_decimal(&mut self, prompt: &str) -> Result<Decimal, Error> {
        self.prompt_parsed(prompt, "Invalid input. Please enter a valid amount.", |input| {
            Decimal::from_str(input).ok()
        })
    }

    /// Prompts for a `YYYY-MM-DD` date; an empty line means today.
    pub fn prompt_date(&mut self, prompt: &str) -> Result<NaiveDate, Error> {
        let today = self.today();
        self.prompt_parsed(
            prompt,
            "Invalid date format. Please use YYYY-MM-DD (e.g., 2026-01-28)",
            |input| {
                if input.is_empty() {
                    Some(today)
                } else {
                    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
                }
            },
        )
    }

    /// `yes` or `y` in any case confirms; anything else declines.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, Error> {
        let answer = self.prompt_line(prompt)?.trim().to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    pub fn pause(&mut self) -> Result<(), Error> {
        writeln!(self.writer, "\nPress Enter to continue...")?;
        self.writer.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        invalid_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, Error> {
        for _ in 0..self.max_attempts {
            let input = self.prompt_line(prompt)?;
            match parse(input.trim()) {
                Some(value) => return Ok(value),
                None => writeln!(self.writer, "{invalid_message}")?,
            }
        }
        Err(Error::TooManyAttempts(self.max_attempts))
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
pub type TestConsole = Console<io::Cursor<Vec<u8>>, Vec<u8>>;

/// A console that reads `input` and records everything written.
#[cfg(test)]
pub fn test_console(input: &str) -> TestConsole {
    Console::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new(), 3)
}

#[cfg(test)]
impl TestConsole {
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).to_string()
    }
}
