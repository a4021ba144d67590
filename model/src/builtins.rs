//! The standard schema.org data types.

use crate::entity::EntityId;
use crate::error::IngestError;
use crate::registry::RegistryBuilder;
use crate::vocab::*;

/// Ids of the standard data types registered by [`register_standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardBuiltins {
    /// `Text` ↦ `string`.
    pub text: EntityId,
    /// `Number` ↦ `number`.
    pub number: EntityId,
    /// `Time` ↦ `string`.
    pub time: EntityId,
    /// `Date` ↦ `string`.
    pub date: EntityId,
    /// `DateTime` ↦ `string`.
    pub date_time: EntityId,
    /// `Boolean`, enumerating `True` and `False`.
    pub boolean: EntityId,
    /// `DataType`, the union over all of the above.
    pub data_type: EntityId,
}

/// Registers `Text`, `Number`, `Time`, `Date`, `DateTime`, `Boolean` and the
/// `DataType` union over them.
///
/// # Errors
///
/// Returns [`IngestError::DuplicateEntity`] if any of them is already registered.
pub fn register_standard(builder: &mut RegistryBuilder) -> Result<StandardBuiltins, IngestError> {
    let text = builder.register_builtin(SCHEMA_TEXT, "string", "Data type: Text.")?;
    let number = builder.register_builtin(SCHEMA_NUMBER, "number", "Data type: Number.")?;
    let time = builder.register_builtin(
        SCHEMA_TIME,
        "string",
        "A point in time recurring on multiple days in the form hh:mm:ss[Z|(+|-)hh:mm].",
    )?;
    let date = builder.register_builtin(
        SCHEMA_DATE,
        "string",
        "A date value in ISO 8601 date format.",
    )?;
    let date_time = builder.register_builtin(
        SCHEMA_DATE_TIME,
        "string",
        "A combination of date and time of day in the form \
         [-]CCYY-MM-DDThh:mm:ss[Z|(+|-)hh:mm] (see Chapter 5.4 of ISO 8601).",
    )?;
    let boolean = builder.register_boolean_enum(
        SCHEMA_BOOLEAN,
        SCHEMA_TRUE,
        SCHEMA_FALSE,
        "Boolean: True or False.",
    )?;
    let data_type = builder.register_data_type_union(
        SCHEMA_DATA_TYPE,
        vec![text, number, time, date, date_time, boolean],
        "The basic data types such as Integers, Strings, etc.",
    )?;

    Ok(StandardBuiltins {
        text,
        number,
        time,
        date,
        date_time,
        boolean,
        data_type,
    })
}
