//! The layout language of Marquee workspaces.
//!
//! A workspace arranges its components on a twelve column grid described by a compact
//! string:
//!
//! ```text
//! layout := row*
//! row    := "r(" column* ")"
//! column := "c" width "(" item* ")"
//! item   := "$" index | row
//! ```
//!
//! `$n` places the `n`-th component of the workspace and a nested row splits a column again.
//! `r(c12($0))r(c6($1)c6($2))` puts one full-width component above two half-width ones.
//!
//! ```
//! use marquee_client_sdk::workspaces::layout::Layout;
//!
//! # fn main() -> marquee_client_sdk::Result<()> {
//! let layout: Layout = "r(c12($0))r(c6($1)c6($2))".parse()?;
//! layout.validate(3)?;
//! assert_eq!(layout.components(), [0, 1, 2]);
//! assert_eq!(Layout::from_grid(2, 3)?.to_string(), "r(c6($0)c6($1))r(c6($2))");
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, cut, map, map_res},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated},
};

use crate::Result;
use crate::error::Error;

/// Number of grid columns in a row.
pub const GRID_WIDTH: u8 = 12;

/// A parsed workspace layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Layout {
    pub rows: Vec<Row>,
}

/// A horizontal band of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Row {
    pub columns: Vec<Column>,
}

/// A column spanning `width` grid columns of its row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Column {
    pub width: u8,
    pub items: Vec<Item>,
}

/// Content stacked inside a column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Item {
    /// Index into the workspace components.
    Component(usize),
    Row(Row),
}

impl Layout {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parses a layout string.
    ///
    /// # Errors
    ///
    /// Returns a validation error pointing at the first offset that does not fit the grammar.
    pub fn parse(input: &str) -> Result<Self> {
        match all_consuming(delimited(multispace0, many0(row), multispace0))(input) {
            Ok((_, rows)) => Ok(Self { rows }),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                let offset = input.len() - e.input.len();
                Err(Error::validation(format!(
                    "invalid layout {input:?}: unexpected input at offset {offset}"
                )))
            }
            Err(nom::Err::Incomplete(_)) => Err(Error::validation(format!(
                "invalid layout {input:?}: unexpected end of input"
            ))),
        }
    }

    /// Lays `count` components out left to right, `per_row` to a row, all of equal width.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `per_row` divides the twelve column grid.
    pub fn from_grid(per_row: usize, count: usize) -> Result<Self> {
        let width = u8::try_from(per_row)
            .ok()
            .filter(|&n| n > 0 && GRID_WIDTH % n == 0)
            .map(|n| GRID_WIDTH / n)
            .ok_or_else(|| {
                Error::validation(format!(
                    "{per_row} components per row do not divide a {GRID_WIDTH} column grid"
                ))
            })?;

        let indexes: Vec<usize> = (0..count).collect();
        let rows = indexes
            .chunks(per_row)
            .map(|chunk| Row {
                columns: chunk
                    .iter()
                    .map(|&index| Column::new(width, vec![Item::Component(index)]))
                    .collect(),
            })
            .collect();

        Ok(Self { rows })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Component indexes in the order they appear.
    #[must_use]
    pub fn components(&self) -> Vec<usize> {
        let mut indexes = Vec::new();
        for row in &self.rows {
            row.collect_components(&mut indexes);
        }
        indexes
    }

    /// Checks the layout against a workspace holding `component_count` components.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a column is narrower than one or wider than twelve grid
    /// columns, a row is wider than the grid, an index has no component, or a component is
    /// placed twice.
    pub fn validate(&self, component_count: usize) -> Result<()> {
        let mut seen = HashSet::new();
        for row in &self.rows {
            row.validate(component_count, &mut seen)?;
        }
        Ok(())
    }
}

impl Row {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Sum of the column widths.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.columns.iter().map(|c| u32::from(c.width)).sum()
    }

    fn collect_components(&self, indexes: &mut Vec<usize>) {
        for item in self.columns.iter().flat_map(|c| &c.items) {
            match item {
                Item::Component(index) => indexes.push(*index),
                Item::Row(row) => row.collect_components(indexes),
            }
        }
    }

    fn validate(&self, component_count: usize, seen: &mut HashSet<usize>) -> Result<()> {
        let width = self.width();
        if width > u32::from(GRID_WIDTH) {
            return Err(Error::validation(format!(
                "row {self} spans {width} columns, more than the {GRID_WIDTH} available"
            )));
        }

        for column in &self.columns {
            if !(1..=GRID_WIDTH).contains(&column.width) {
                return Err(Error::validation(format!(
                    "column width {} is outside 1..={GRID_WIDTH}",
                    column.width
                )));
            }

            for item in &column.items {
                match item {
                    Item::Component(index) if *index >= component_count => {
                        return Err(Error::validation(format!(
                            "layout references component ${index} but only {component_count} exist"
                        )));
                    }
                    Item::Component(index) => {
                        if !seen.insert(*index) {
                            return Err(Error::validation(format!(
                                "component ${index} is placed more than once"
                            )));
                        }
                    }
                    Item::Row(row) => row.validate(component_count, seen)?,
                }
            }
        }

        Ok(())
    }
}

impl Column {
    #[must_use]
    pub fn new(width: u8, items: Vec<Item>) -> Self {
        Self { width, items }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rows.iter().try_for_each(|row| write!(f, "{row}"))
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("r(")?;
        for column in &self.columns {
            write!(f, "{column}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}(", self.width)?;
        for item in &self.items {
            match item {
                Item::Component(index) => write!(f, "${index}")?,
                Item::Row(row) => write!(f, "{row}")?,
            }
        }
        f.write_str(")")
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Layout::parse(s)
    }
}

fn ws<'input, O, F>(inner: F) -> impl FnMut(&'input str) -> IResult<&'input str, O>
where
    F: FnMut(&'input str) -> IResult<&'input str, O>,
{
    delimited(multispace0, inner, multispace0)
}

// once the opening token of a row, column or item matched, the rest must follow
fn row(input: &str) -> IResult<&str, Row> {
    map(
        preceded(
            ws(tag("r(")),
            cut(terminated(many0(column), ws(char(')')))),
        ),
        Row::new,
    )(input)
}

fn column(input: &str) -> IResult<&str, Column> {
    map(
        preceded(
            ws(char('c')),
            cut(pair(
                map_res(digit1, str::parse::<u8>),
                delimited(ws(char('(')), many0(item), ws(char(')'))),
            )),
        ),
        |(width, items)| Column::new(width, items),
    )(input)
}

fn item(input: &str) -> IResult<&str, Item> {
    alt((
        map(
            preceded(ws(char('$')), cut(map_res(digit1, str::parse::<usize>))),
            Item::Component,
        ),
        map(row, Item::Row),
    ))(input)
}
