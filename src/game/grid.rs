use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

use generic_array::{ArrayLength, GenericArray};

/// Ties a typed index to the number of cells it can address.
/// Implemented by row/column index types so the grid dimensions are
/// fixed at compile time.
pub trait WithLength {
    type Length: ArrayLength;
}

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridIndex<R, C> {
    row: R,
    col: C,
}

impl<R, C> GridIndex<R, C> {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: R, col: C) -> Self {
        Self { row, col }
    }
}

impl<R: Copy, C: Copy> GridIndex<R, C> {
    /// Returns value of `self.row`
    pub fn row(&self) -> R {
        self.row
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> C {
        self.col
    }
}

impl<R, C> Display for GridIndex<R, C>
where
    R: Copy + Into<usize>,
    C: Copy + Into<usize>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row.into(), self.col.into())
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Length of array is defined by the index types `R` and `C`.
#[derive(Clone, Debug)]
pub struct Grid<T, R: WithLength, C: WithLength> {
    contents: GenericArray<GenericArray<T, C::Length>, R::Length>,
}

impl<T: Default, R: WithLength, C: WithLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: WithLength, C: WithLength> Deref for Grid<T, R, C> {
    type Target = [GenericArray<T, C::Length>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<T: Display, R: WithLength, C: WithLength> Display for Grid<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[\n")?;
        for row in self.deref() {
            f.write_str("[")?;
            for val in row {
                write!(f, "{}", val)?;
            }
            f.write_str("]\n")?;
        }
        f.write_str("]")
    }
}

impl<T, R, C> Index<GridIndex<R, C>> for Grid<T, R, C>
where
    R: WithLength + Copy + Into<usize>,
    C: WithLength + Copy + Into<usize>,
{
    type Output = T;

    fn index(&self, index: GridIndex<R, C>) -> &Self::Output {
        &self.contents[index.row().into()][index.col().into()]
    }
}

impl<T, R, C> IndexMut<GridIndex<R, C>> for Grid<T, R, C>
where
    R: WithLength + Copy + Into<usize>,
    C: WithLength + Copy + Into<usize>,
{
    fn index_mut(&mut self, index: GridIndex<R, C>) -> &mut Self::Output {
        &mut self.contents[index.row().into()][index.col().into()]
    }
}
