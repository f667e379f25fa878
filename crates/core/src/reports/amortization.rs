//! Amortization schedule table.

use super::document::{Column, DocumentBuilder, SectionKind};
use super::error::CompositionError;
use super::layout::Cursor;
use super::sections::{
    AMORTIZATION_FONT_SIZE, RenderContext, SectionRenderer, TableSpec, ensure_room, heading,
    render_table,
};
use crate::simulation::PaymentRow;

/// Column widths in millimetres, in display order.
pub const COLUMN_WIDTHS: [u32; 14] = [15, 15, 20, 25, 20, 20, 25, 25, 25, 20, 20, 15, 25, 20];

/// Checks that payment numbers start at 1 and strictly increase.
///
/// # Errors
///
/// `ScheduleStart` when the first row is not payment 1, `PaymentOutOfOrder`
/// when a row does not follow its predecessor.
pub fn validate_schedule(payments: &[PaymentRow]) -> Result<(), CompositionError> {
    let Some(first) = payments.first() else {
        return Ok(());
    };
    if first.payment_number != 1 {
        return Err(CompositionError::ScheduleStart {
            found: first.payment_number,
        });
    }

    for (position, pair) in payments.windows(2).enumerate() {
        let (previous, found) = (pair[0].payment_number, pair[1].payment_number);
        if found <= previous {
            return Err(CompositionError::PaymentOutOfOrder {
                position: position + 1,
                previous,
                found,
            });
        }
    }
    Ok(())
}

/// Full schedule, one row per installment, paginated with a repeated header.
pub(crate) struct AmortizationTable;

impl SectionRenderer for AmortizationTable {
    fn render(
        &self,
        builder: &mut DocumentBuilder,
        cursor: Cursor,
        ctx: &RenderContext<'_>,
    ) -> Result<Cursor, CompositionError> {
        let payments = ctx.result.payments();
        validate_schedule(payments)?;

        let layout = ctx.layout;
        let heading_y = ensure_room(
            builder,
            layout,
            cursor.y + layout.section_gap,
            layout.amortization_row_height,
            1,
        );
        builder.push(heading(
            SectionKind::Amortization,
            layout,
            heading_y,
            ctx.labels.amortization_heading,
        ));

        let columns = ctx
            .labels
            .amortization_columns
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(title, width)| Column {
                title: (*title).to_string(),
                width,
            })
            .collect();

        Ok(render_table(
            builder,
            layout,
            TableSpec {
                section: SectionKind::Amortization,
                columns,
                row_height: layout.amortization_row_height,
                font_size: AMORTIZATION_FONT_SIZE,
            },
            heading_y + layout.heading_gap,
            payments.iter().map(|row| ctx.formatter.payment_cells(row)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(numbers: &[u32]) -> Vec<PaymentRow> {
        numbers.iter().copied().map(PaymentRow::new).collect()
    }

    #[test]
    fn test_column_widths_total() {
        assert_eq!(COLUMN_WIDTHS.iter().sum::<u32>(), 290);
    }

    #[test]
    fn test_empty_schedule_is_valid() {
        assert!(validate_schedule(&[]).is_ok());
    }

    #[test]
    fn test_increasing_schedule_is_valid() {
        assert!(validate_schedule(&schedule(&[1, 2, 3, 4])).is_ok());
    }

    #[test]
    fn test_schedule_must_start_at_one() {
        assert_eq!(
            validate_schedule(&schedule(&[0, 1])),
            Err(CompositionError::ScheduleStart { found: 0 })
        );
        assert_eq!(
            validate_schedule(&schedule(&[2, 3])),
            Err(CompositionError::ScheduleStart { found: 2 })
        );
    }

    #[test]
    fn test_out_of_order_payment_is_rejected() {
        assert_eq!(
            validate_schedule(&schedule(&[1, 2, 2, 3])),
            Err(CompositionError::PaymentOutOfOrder {
                position: 2,
                previous: 2,
                found: 2,
            })
        );
    }
}
