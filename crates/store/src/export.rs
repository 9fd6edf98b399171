//! Spreadsheet export of catalog snapshots.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use stockbook_core::Product;

use crate::error::StoreResult;

const SHEET_NAME: &str = "Products";
const HEADER: [&str; 5] = ["ID", "Description", "Quantity", "Value", "Type"];

/// Write `products` as a single-sheet workbook: a bold header row followed
/// by one row per product, in the order given.
pub(crate) fn write_workbook(products: &[Product], path: &Path) -> StoreResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, product) in products.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_number(row, 0, product.id().as_i64() as f64)?;
        worksheet.write_string(row, 1, product.description())?;
        worksheet.write_number(row, 2, product.quantity() as f64)?;
        worksheet.write_number(row, 3, product.value())?;
        worksheet.write_string(row, 4, product.kind().as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}
