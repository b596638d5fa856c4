use smallvec::SmallVec;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Signed tick increment on the 1/2/5 × 10^k ladder.
///
/// Positive results are the step itself; negative results encode a fractional
/// step as `-1 / step` so tick values can be produced by division, which keeps
/// them free of accumulated float error (`0.1 * 3 != 0.3`).
pub(crate) fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Round values inside `[start, stop]` spaced by a 1/2/5 step, roughly `count` of them.
///
/// Output follows the direction of the input interval.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let increment = tick_increment(low, high, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let mut ticks: SmallVec<[f64; 16]> = SmallVec::new();
    if increment > 0.0 {
        let first = (low / increment).ceil() as i64;
        let last = (high / increment).floor() as i64;
        ticks.extend((first..=last).map(|i| i as f64 * increment));
    } else {
        let inverse = -increment;
        let first = (low * inverse).ceil() as i64;
        let last = (high * inverse).floor() as i64;
        ticks.extend((first..=last).map(|i| i as f64 / inverse));
    }

    if reverse {
        ticks.reverse();
    }
    ticks.into_vec()
}

/// Decimal places needed to print the ticks of `[start, stop]` without loss.
pub fn tick_precision(start: f64, stop: f64, count: usize) -> usize {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return 0;
    }
    let (low, high) = if stop < start { (stop, start) } else { (start, stop) };
    let increment = tick_increment(low, high, count);
    if increment < 0.0 {
        (-increment).log10().ceil().max(0.0) as usize
    } else {
        0
    }
}

/// Formats an axis tick with fixed precision and comma thousands grouping.
pub fn format_tick(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0" reads as noise on an axis.
    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && fraction.is_none_or(|f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
