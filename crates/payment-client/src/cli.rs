use thiserror::Error;

pub const DEFAULT_AMOUNT: u64 = 5000;
pub const DEFAULT_CURRENCY: &str = "JPY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub amount: u64,
    pub currency: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("missing value for argument: {0}")]
    MissingValue(String),
    #[error("invalid --amount value: {0}")]
    InvalidAmount(String),
    #[error("invalid --currency value: {0:?}")]
    InvalidCurrency(String),
    #[error("help requested")]
    HelpRequested,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CliOptions {
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => return Err(CliError::HelpRequested),
                "--amount" => {
                    let value = iter.next().ok_or(CliError::MissingValue(arg.clone()))?;
                    options.amount = value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| CliError::InvalidAmount(value.clone()))?;
                }
                "--currency" => {
                    let value = iter.next().ok_or(CliError::MissingValue(arg.clone()))?;
                    options.currency = parse_currency(&value)?;
                }
                unknown => return Err(CliError::UnknownArgument(unknown.to_string())),
            }
        }

        Ok(options)
    }
}

fn parse_currency(value: &str) -> Result<String, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(CliError::InvalidCurrency(value.to_string()));
    }

    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::{CliError, CliOptions};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn defaults_to_5000_jpy() {
        let options = CliOptions::parse(Vec::new()).expect("defaults should parse");

        assert_eq!(options.amount, 5000);
        assert_eq!(options.currency, "JPY");
    }

    #[test]
    fn amount_and_currency_are_parsed() {
        let options = CliOptions::parse(args(&["--amount", "120", "--currency", "usd"]))
            .expect("options should parse");

        assert_eq!(options.amount, 120);
        assert_eq!(options.currency, "USD");
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            CliOptions::parse(args(&["--amount", "-5"])),
            Err(CliError::InvalidAmount("-5".to_string()))
        );
        assert_eq!(
            CliOptions::parse(args(&["--currency", "J P Y"])),
            Err(CliError::InvalidCurrency("J P Y".to_string()))
        );
        assert_eq!(
            CliOptions::parse(args(&["--amount"])),
            Err(CliError::MissingValue("--amount".to_string()))
        );
        assert_eq!(
            CliOptions::parse(args(&["--verbose"])),
            Err(CliError::UnknownArgument("--verbose".to_string()))
        );
        assert_eq!(
            CliOptions::parse(args(&["-h"])),
            Err(CliError::HelpRequested)
        );
    }
}
