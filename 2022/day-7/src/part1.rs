use crate::filesystem::{session, FileSystem};
use miette::*;

const SIZE_LIMIT: u64 = 100_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let fs = FileSystem::replay(&session(input)?)?;

    let total: u64 = fs
        .directory_sizes()
        .into_iter()
        .filter(|&size| size <= SIZE_LIMIT)
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";
        assert_eq!("95437", process(input)?);
        Ok(())
    }
}
