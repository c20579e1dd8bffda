use lib::prelude::*;

#[entry]
fn main(mut input: IStr, _: &Opts) -> Result<u64> {
    let mut sum = 0u64;

    while let Some(line) = input.try_line::<IStr>()? {
        let value = calibration(line)?;
        log::debug!("{}: {value}", line.as_bstr());
        sum = sum.checked_add(value).context("sum overflow")?;
    }

    Ok(sum)
}

/// The first and last digit of a line, read as a two-digit number.
fn calibration(line: IStr) -> Result<u64, IStrError> {
    let data = line.as_data();

    let first = data.iter().find(|c| c.is_ascii_digit());
    let last = data.iter().rfind(|c| c.is_ascii_digit());

    let (Some(first), Some(last)) = (first, last) else {
        return Err(line.error(ErrorKind::ExpectedDigit));
    };

    Ok(u64::from(first - b'0') * 10 + u64::from(last - b'0'))
}
