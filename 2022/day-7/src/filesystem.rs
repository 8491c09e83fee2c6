use aoc_common::{Palette, TerminalColor};
use miette::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{self, newline, not_line_ending},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated},
    IResult,
};

const TREE_COLOR: TerminalColor = TerminalColor::White;
const DIRECTORY_COLOR: TerminalColor = TerminalColor::BrightCyan;
const FILE_COLOR: TerminalColor = TerminalColor::BrightGreen;
const SIZE_COLOR: TerminalColor = TerminalColor::BrightMagenta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Root,
    Up,
    Down(&'a str),
}

/// One line of the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Cd(Target<'a>),
    Ls,
    Dir(&'a str),
    File(u64, &'a str),
}

fn target(name: &str) -> Target<'_> {
    match name {
        "/" => Target::Root,
        ".." => Target::Up,
        name => Target::Down(name),
    }
}

fn line(input: &str) -> IResult<&str, Line<'_>> {
    alt((
        map(preceded(tag("$ cd "), not_line_ending), |name| {
            Line::Cd(target(name))
        }),
        value(Line::Ls, tag("$ ls")),
        map(preceded(tag("dir "), not_line_ending), Line::Dir),
        map(
            separated_pair(complete::u64, complete::char(' '), not_line_ending),
            |(size, name)| Line::File(size, name),
        ),
    ))(input)
}

pub fn session(input: &str) -> Result<Vec<Line<'_>>> {
    let (_, lines) = all_consuming(terminated(
        separated_list1(newline, line),
        opt(newline),
    ))(input)
    .map_err(|e| miette!("Parse failed: {e}"))?;
    Ok(lines)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File(u64),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Directory tree rebuilt from a terminal session.
///
/// Nodes live in one vector and refer to each other by index. A child is
/// always stored after its parent.
#[derive(Debug, Clone)]
pub struct FileSystem {
    nodes: Vec<Node>,
}

impl FileSystem {
    const ROOT: usize = 0;

    fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: "/".to_string(),
                kind: NodeKind::Directory,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[tracing::instrument(skip(lines))]
    pub fn replay(lines: &[Line<'_>]) -> Result<Self> {
        let mut fs = Self::new();
        let mut cwd = Self::ROOT;
        let mut listing = false;

        for (number, line) in lines.iter().enumerate() {
            match *line {
                Line::Cd(Target::Root) => {
                    cwd = Self::ROOT;
                    listing = false;
                }
                Line::Cd(Target::Up) => {
                    cwd = fs.nodes[cwd]
                        .parent
                        .ok_or_else(|| miette!("Can't leave the root directory at line {}", number + 1))?;
                    listing = false;
                }
                Line::Cd(Target::Down(name)) => {
                    cwd = fs
                        .child(cwd, name)
                        .filter(|&child| fs.nodes[child].kind == NodeKind::Directory)
                        .ok_or_else(|| {
                            miette!("Unknown directory '{}' referenced at line {}", name, number + 1)
                        })?;
                    listing = false;
                }
                Line::Ls => listing = true,
                Line::Dir(name) => {
                    ensure!(listing, "Directory listing outside of 'ls' at line {}", number + 1);
                    fs.add(cwd, name, NodeKind::Directory);
                }
                Line::File(size, name) => {
                    ensure!(listing, "File listing outside of 'ls' at line {}", number + 1);
                    fs.add(cwd, name, NodeKind::File(size));
                }
            }
        }

        Ok(fs)
    }

    fn child(&self, dir: usize, name: &str) -> Option<usize> {
        self.nodes[dir]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].name == name)
    }

    fn add(&mut self, dir: usize, name: &str, kind: NodeKind) {
        // `ls` may run more than once in the same directory
        if self.child(dir, name).is_some() {
            return;
        }
        let index = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            kind,
            parent: Some(dir),
            children: Vec::new(),
        });
        self.nodes[dir].children.push(index);
    }

    /// Total size of every node, indexed like `nodes`.
    fn sizes(&self) -> Vec<u64> {
        let mut sizes = self
            .nodes
            .iter()
            .map(|node| match node.kind {
                NodeKind::File(size) => size,
                NodeKind::Directory => 0,
            })
            .collect::<Vec<_>>();

        for index in (1..self.nodes.len()).rev() {
            if let Some(parent) = self.nodes[index].parent {
                sizes[parent] += sizes[index];
            }
        }
        sizes
    }

    pub fn directory_sizes(&self) -> Vec<u64> {
        self.sizes()
            .into_iter()
            .zip(&self.nodes)
            .filter(|(_, node)| node.kind == NodeKind::Directory)
            .map(|(size, _)| size)
            .collect()
    }

    pub fn used_space(&self) -> u64 {
        self.sizes()[Self::ROOT]
    }

    pub fn render(&self, palette: &Palette) -> String {
        let mut out = String::new();
        self.render_node(Self::ROOT, &mut Vec::new(), palette, &mut out);
        out.push_str(&palette.reset());
        out
    }

    fn render_node(&self, index: usize, is_last: &mut Vec<bool>, palette: &Palette, out: &mut String) {
        if let Some((&last, ancestors)) = is_last.split_last() {
            out.push_str(&palette.foreground(TREE_COLOR));
            for &ancestor_last in ancestors {
                out.push_str(if ancestor_last { "    " } else { "│   " });
            }
            out.push_str(if last { "└── " } else { "├── " });
        }

        let node = &self.nodes[index];
        match node.kind {
            NodeKind::File(size) => {
                out.push_str(&format!(
                    "{}{} {}{}\n",
                    palette.foreground(FILE_COLOR),
                    node.name,
                    palette.foreground(SIZE_COLOR),
                    size
                ));
            }
            NodeKind::Directory => {
                out.push_str(&format!("{}{}\n", palette.foreground(DIRECTORY_COLOR), node.name));
                for (position, &child) in node.children.iter().enumerate() {
                    is_last.push(position == node.children.len() - 1);
                    self.render_node(child, is_last, palette, out);
                    is_last.pop();
                }
            }
        }
    }
}

/// The directory tree drawn with box characters.
#[tracing::instrument(skip(input))]
pub fn visualize(input: &str, palette: &Palette) -> Result<String> {
    let fs = FileSystem::replay(&session(input)?)?;
    Ok(fs.render(palette))
}
