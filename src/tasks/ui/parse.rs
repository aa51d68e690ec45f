use crate::FailResult;
use cellmetric_array_types::V3;

/// Parse a number, accepting rationals like `1/3` as well as floats.
pub fn parse_number(word: &str) -> FailResult<f64> {
    let word = word.trim();
    if word.contains('/') {
        let mut iter = word.split('/');
        let (numer, denom) = match (iter.next(), iter.next(), iter.next()) {
            (Some(numer), Some(denom), None) => (numer, denom),
            _ => bail!("a rational cannot have multiple '/'!"),
        };
        let numer: i32 = numer.trim().parse()?;
        let denom: i32 = denom.trim().parse()?;
        if denom == 0 {
            bail!("zero denominator in {:?}", word);
        }
        Ok(numer as f64 / denom as f64)
    } else {
        word.parse::<f64>().map_err(|_| {
            // make sure error mentions possibility of using rationals
            format_err!("{:?} is not a valid floating point or rational number", word)
        })
    }
}

/// Parse a vector written as `X,Y,Z`.
pub fn parse_v3(s: &str) -> FailResult<V3> {
    let words: Vec<_> = s.split(',').collect();
    if words.len() != 3 {
        bail!("Expected 3 comma-separated floats or rationals, got {:?}", s);
    }

    let mut out = V3::zero();
    for (dest, word) in out.iter_mut().zip(words) {
        *dest = parse_number(word)?;
    }
    Ok(out)
}
