use crate::error::InputError;

/// Labels each cell with the index of the field that is largest there.
///
/// All fields must have the same length. On ties the lower index wins.
///
/// # Errors
///
/// Returns `InputError::EmptyFields` if `fields` is empty, or
/// `InputError::FieldLength` if a field's length differs from the first's.
pub fn dirichlet_regions<F>(fields: &[F]) -> Result<Vec<usize>, InputError>
where
    F: AsRef<[f64]>,
{
    let (head, rest) = fields.split_first().ok_or(InputError::EmptyFields)?;
    let len = head.as_ref().len();
    for (i, f) in rest.iter().enumerate() {
        let found = f.as_ref().len();
        if found != len {
            return Err(InputError::FieldLength {
                field: i + 1,
                expected: len,
                found,
            });
        }
    }

    let labels = (0..len)
        .map(|cell| {
            let mut best = 0;
            let mut best_value = head.as_ref()[cell];
            for (i, f) in rest.iter().enumerate() {
                let value = f.as_ref()[cell];
                if value > best_value {
                    best = i + 1;
                    best_value = value;
                }
            }
            best
        })
        .collect();
    Ok(labels)
}
