use itertools::Itertools;
use miette::*;

const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

pub fn parse(input: &str) -> Result<Vec<i64>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim()
                .parse::<i64>()
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid number '{line}'"))
        })
        .collect()
}

/// Multiplies every number by the decryption key.
pub fn decrypt(numbers: &[i64], key: i64) -> Result<Vec<i64>> {
    numbers
        .iter()
        .map(|&n| {
            n.checked_mul(key)
                .ok_or_else(|| miette!("Overflow applying decryption key to {}", n))
        })
        .collect()
}

/// Mixes `numbers` `rounds` times and returns them in their final circular
/// order, starting from where the first number used to be.
#[tracing::instrument(skip(numbers))]
pub fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
    // original indices, in mixed order
    let mut order: Vec<usize> = (0..numbers.len()).collect();
    let cycle = numbers.len().saturating_sub(1) as i64;

    if cycle > 0 {
        for _ in 0..rounds {
            for (index, &number) in numbers.iter().enumerate() {
                let Some(from) = order.iter().position(|&i| i == index) else {
                    continue;
                };
                order.remove(from);
                let to = (from as i64 + number.rem_euclid(cycle)).rem_euclid(cycle) as usize;
                order.insert(to, index);
            }
        }
    }

    order.into_iter().map(|index| numbers[index]).collect()
}

/// Sum of the numbers 1000, 2000 and 3000 places after the 0.
pub fn grove_coordinates(mixed: &[i64]) -> Result<i64> {
    let zero = mixed
        .iter()
        .position(|&n| n == 0)
        .ok_or_else(|| miette!("The list has no 0"))?;

    let coordinates = GROVE_OFFSETS
        .iter()
        .map(|offset| mixed[(zero + offset) % mixed.len()])
        .collect_vec();
    tracing::debug!(?coordinates, "grove coordinates");

    coordinates
        .iter()
        .try_fold(0i64, |sum, &n| sum.checked_add(n))
        .ok_or_else(|| miette!("Grove coordinates {coordinates:?} overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERS: [i64; 7] = [1, 2, -3, 3, -2, 0, 4];

    /// Rotates `mixed` so it starts at `first`, for comparing circular lists.
    fn rotated(first: i64, mixed: &[i64]) -> Vec<i64> {
        let start = mixed.iter().position(|&n| n == first).unwrap();
        mixed.iter().cycle().skip(start).take(mixed.len()).copied().collect()
    }

    #[test]
    fn single_mix() {
        assert_eq!(vec![1, 2, -3, 4, 0, 3, -2], rotated(1, &mix(&NUMBERS, 1)));
    }

    #[test]
    fn decrypted_mix() -> Result<()> {
        let numbers = decrypt(&NUMBERS, 811589153)?;
        let mixed = mix(&numbers, 1);
        assert_eq!(
            vec![
                0,
                -2434767459,
                3246356612,
                -1623178306,
                2434767459,
                1623178306,
                811589153
            ],
            rotated(0, &mixed)
        );
        Ok(())
    }

    #[test]
    fn missing_zero() {
        assert!(grove_coordinates(&mix(&[1, 2, 3], 1)).is_err());
    }

    #[test]
    fn single_number() -> Result<()> {
        assert_eq!(vec![0], mix(&[0], 3));
        assert_eq!(0, grove_coordinates(&[0])?);
        Ok(())
    }

    #[test]
    fn key_overflow() {
        assert!(decrypt(&[i64::MAX / 2], 811589153).is_err());
    }

    #[test]
    fn extreme_values() {
        assert_eq!(vec![i64::MAX, 1, 0], mix(&[0, i64::MAX, 1], 1));
        assert_eq!(vec![0, 1, i64::MIN], mix(&[0, i64::MIN, 1], 1));
    }
}
