use crate::filesystem::{session, FileSystem};
use miette::*;

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_FREE: u64 = 30_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let fs = FileSystem::replay(&session(input)?)?;

    let free = DISK_SIZE.saturating_sub(fs.used_space());
    let Some(missing) = NEEDED_FREE.checked_sub(free).filter(|&missing| missing > 0) else {
        tracing::info!(free, "already enough free space");
        return Ok("0".to_string());
    };

    let smallest = fs
        .directory_sizes()
        .into_iter()
        .filter(|&size| size >= missing)
        .min()
        .ok_or_else(|| miette!("No directory frees {missing} bytes"))?;

    Ok(smallest.to_string())
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
        assert_eq!("24933642", process(input)?);
        Ok(())
    }

    #[test]
    fn nothing_to_delete() -> Result<()> {
        assert_eq!("0", process("$ cd /\n$ ls\n100 small.txt")?);
        Ok(())
    }
}
