use miette::*;

/// Total calories carried by each elf, in input order.
///
/// Inventories are separated by a blank line.
pub fn elf_totals(input: &str) -> Result<Vec<u64>> {
    input
        .trim_end()
        .split("\n\n")
        .map(|inventory| {
            inventory
                .lines()
                .map(|line| {
                    line.trim()
                        .parse::<u64>()
                        .into_diagnostic()
                        .wrap_err_with(|| format!("Invalid calorie value '{line}'"))
                })
                .sum::<Result<u64>>()
        })
        .collect()
}
