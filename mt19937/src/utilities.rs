use anyhow::{Context, Result};
use mt19937::SeedOption;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

// splits and optionally trims the input String on a separator character
// returns a Vec of parse::<T>() over the splits
fn split_on<T>(text: &str, sep: char, trim: bool) -> Result<Vec<T>, Box<dyn std::error::Error>>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error,
    <T as FromStr>::Err: 'static,
{
    let mut parsed_splits = vec![];
    for mut s in text.split(sep) {
        if trim {
            s = s.trim();
        }
        parsed_splits.push(s.parse::<T>()?)
    }
    Ok(parsed_splits)
}

// ==============================================================

// "1234" => SeedOption::Integer(1234), "1,2,3" => SeedOption::Array([1, 2, 3])
pub fn seed_option(text: &str) -> Result<SeedOption, Box<dyn std::error::Error>> {
    let mut values = split_on::<i64>(text, ',', true)?;
    Ok(match values.len() {
        1 => SeedOption::Integer(values.remove(0)),
        _ => SeedOption::Array(values),
    })
}

// read the contents of a file, a filename of "-" implies stdin
pub fn read_input(file: &Path) -> Result<String> {
    let mut text = String::new();
    match file.as_os_str() != "-" {
        true => {
            File::open(file)
                .with_context(|| format!("could not open file `{:?}`", file.as_os_str()))?
                .read_to_string(&mut text)
                .with_context(|| format!("could not read file `{:?}`", file.as_os_str()))?;
        }
        false => {
            io::stdin()
                .read_to_string(&mut text)
                .with_context(|| "could not read `stdin`")?;
        }
    }
    Ok(text)
}

// This should be called in cli apps
pub fn reset_sigpipe() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_family = "unix")]
    {
        use nix::sys::signal;

        unsafe {
            signal::signal(signal::Signal::SIGPIPE, signal::SigHandler::SigDfl)?;
        }
    }

    Ok(())
}
