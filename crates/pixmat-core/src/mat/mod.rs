//! Mat - 2D numeric matrix
//!
//! `Mat<T>` is a dense 2D array of numeric values stored in row-major
//! order. It is the pixel container used by the I/O crate: decoded images
//! arrive as integer matrices ([`IMat`]), and real-valued intermediate
//! results live in double matrices ([`DMat`]).
//!
//! # Examples
//!
//! ```
//! use pixmat_core::IMat;
//!
//! // Create a 4x6 integer matrix, all zeros
//! let mut m = IMat::new(4, 6).unwrap();
//!
//! // Set and get elements by (row, col)
//! m.set(2, 3, 128).unwrap();
//! assert_eq!(m.get(2, 3).unwrap(), 128);
//! assert_eq!(m.dimensions(), (4, 6));
//! ```

use crate::error::{Error, Result};

/// Integer matrix (one decoded image channel, elements typically 0..=255)
pub type IMat = Mat<i32>;

/// Double-precision matrix (real-valued intensities)
pub type DMat = Mat<f64>;

/// Dense 2D numeric matrix
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The element at
/// (row, col) is at index `row * cols + col`, matching the top-to-bottom
/// scan order of raster image formats.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat<T> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Element data (row-major, no padding)
    data: Vec<T>,
}

impl<T: Copy> Mat<T> {
    /// Create a new matrix with all elements set to the default value
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows (must be > 0)
    /// * `cols` - Number of columns (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if rows or cols is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmat_core::DMat;
    ///
    /// let m = DMat::new(480, 640).unwrap();
    /// assert_eq!(m.rows(), 480);
    /// assert_eq!(m.cols(), 640);
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::new_with_value(rows, cols, T::default())
    }

    /// Create a new matrix with all elements set to the specified value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if rows or cols is 0.
    pub fn new_with_value(rows: usize, cols: usize, value: T) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }

        let data = vec![value; rows * cols];

        Ok(Mat { rows, cols, data })
    }

    /// Create a matrix from raw data
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `data` - Element data in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't
    /// match.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }

        let expected_size = rows * cols;
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                rows,
                cols,
                expected_size
            )));
        }

        Ok(Mat { rows, cols, data })
    }

    /// Get the number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the matrix dimensions as (rows, cols)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                index: row * self.cols + col,
                len: self.data.len(),
            });
        }

        Ok(self.data[row * self.cols + col])
    }

    /// Set the element at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                index: row * self.cols + col,
                len: self.data.len(),
            });
        }

        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Get the element at (row, col) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn get_unchecked(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Set the element at (row, col) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn set_unchecked(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Get a row as a slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Get a row as a mutable slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Get raw access to the element data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get mutable access to the element data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Set all elements to the specified value
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Apply a function to every element, producing a new matrix of the
    /// same shape
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmat_core::IMat;
    ///
    /// let m = IMat::new_with_value(2, 2, 10).unwrap();
    /// let doubled = m.map(|v| v * 2);
    /// assert_eq!(doubled.get(0, 0).unwrap(), 20);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Mat<U>
    where
        F: Fn(T) -> U,
    {
        Mat {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Check that two matrices have the same dimensions
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions differ.
    pub fn check_same_size<U: Copy>(&self, other: &Mat<U>) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::IncompatibleSizes(
                self.rows, self.cols, other.rows, other.cols,
            ));
        }
        Ok(())
    }
}
