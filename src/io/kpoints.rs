use crate::resolver::ResolvedKpoints;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Renders the k-points as the contents of a VASP KPOINTS file.
///
/// A mesh is written as an automatic grid with no shift and a band path as an
/// explicit list of cartesian k-points with equal weights.
pub fn to_string(kpoints: &ResolvedKpoints, comment: &str) -> String {
    let mut out = String::new();
    out.push_str(comment.lines().next().unwrap_or(""));
    out.push('\n');
    match kpoints {
        ResolvedKpoints::Mesh { grid, gamma } => {
            let style = if *gamma { "Gamma" } else { "Monkhorst-Pack" };
            out.push_str(&format!("0\n{}\n{} {} {}\n0 0 0\n",
                                  style, grid[0], grid[1], grid[2]));
        }
        ResolvedKpoints::Line(kpts) => {
            out.push_str(&format!("{}\nCartesian\n", kpts.len()));
            for k in kpts.iter() {
                out.push_str(&format!("{:>14.8} {:>14.8} {:>14.8} 1\n",
                                      k[0], k[1], k[2]));
            }
        }
    }
    out
}

/// Writes the k-points to a KPOINTS file at `path`.
pub fn write(path: impl AsRef<Path>,
             kpoints: &ResolvedKpoints,
             comment: &str)
             -> io::Result<()> {
    let mut buffer = BufWriter::new(File::create(path)?);
    buffer.write_all(to_string(kpoints, comment).as_bytes())?;
    buffer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpoints_gamma_mesh() {
        let kpoints = ResolvedKpoints::Mesh { grid: [4, 4, 8],
                                              gamma: true };
        assert_eq!(to_string(&kpoints, "from spacing"),
                   "from spacing\n0\nGamma\n4 4 8\n0 0 0\n")
    }

    #[test]
    fn kpoints_monkhorst_mesh() {
        let kpoints = ResolvedKpoints::Mesh { grid: [3, 3, 1],
                                              gamma: false };
        assert_eq!(to_string(&kpoints, "slab"),
                   "slab\n0\nMonkhorst-Pack\n3 3 1\n0 0 0\n")
    }

    #[test]
    fn kpoints_comment_single_line() {
        let kpoints = ResolvedKpoints::Mesh { grid: [1, 1, 1],
                                              gamma: true };
        let text = to_string(&kpoints, "first\nsecond");
        assert!(text.starts_with("first\n0\n"))
    }

    #[test]
    fn kpoints_line() {
        let kpoints = ResolvedKpoints::Line(vec![[0., 0., 0.], [0.5, 0., 0.25]]);
        let text = to_string(&kpoints, "path");
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(lines[0], "path");
        assert_eq!(lines[1], "2");
        assert_eq!(lines[2], "Cartesian");
        assert_eq!(lines[3].split_whitespace().collect::<Vec<&str>>(),
                   vec!["0.00000000", "0.00000000", "0.00000000", "1"]);
        assert_eq!(lines[4].split_whitespace().collect::<Vec<&str>>(),
                   vec!["0.50000000", "0.00000000", "0.25000000", "1"]);
        assert_eq!(lines.len(), 5);
    }
}
