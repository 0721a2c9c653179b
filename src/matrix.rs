//! A dense row-major matrix, used for the cost and operation tables.
use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use itertools::Itertools;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// A copy of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> Vec<T> {
        assert!(j < self.cols, "column {j} out of range for {} columns", self.cols);
        (0..self.rows).map(|i| self[(i, j)].clone()).collect()
    }

    /// A copy as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i},{j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i},{j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

/// Tab separated rendering with one heading symbol per row and column.
///
/// `row_heading` must have one char per row and `col_heading` one per column.
pub fn format_with_headings<T: Display>(
    row_heading: &[char],
    col_heading: &[char],
    matrix: &Matrix<T>,
) -> String {
    assert_eq!(row_heading.len(), matrix.rows());
    assert_eq!(col_heading.len(), matrix.cols());
    let mut s = format!("\t{}", col_heading.iter().join("\t"));
    for (i, c) in row_heading.iter().enumerate() {
        s.push_str(&format!("\n{c}\t{}", matrix.row(i).iter().join("\t")));
    }
    s
}
