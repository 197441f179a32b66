//! Single-string predicate endpoints.

use axum::Json;
use verity::catalog;

use crate::server::error::ApiError;

use super::{required, BasicRequest, ResultResponse};

macro_rules! predicate_handler {
    ($name:ident, $route:literal, $func:path) => {
        #[doc = concat!("POST /api/", $route)]
        pub async fn $name(
            Json(body): Json<BasicRequest>,
        ) -> Result<Json<ResultResponse<bool>>, ApiError> {
            let input = required(&body.input_string)?;
            Ok(Json(ResultResponse {
                result: $func(input),
            }))
        }
    };
}

predicate_handler!(is_integer, "isInteger", catalog::is_integer);
predicate_handler!(is_decimal, "isDecimal", catalog::is_decimal);
predicate_handler!(is_hexadecimal, "isHexadecimal", catalog::is_hexadecimal);
predicate_handler!(is_binary_string, "isBinaryString", catalog::is_binary_string);
predicate_handler!(is_alpha_numeric, "isAlphaNumeric", catalog::is_alpha_numeric);
predicate_handler!(is_all_caps, "isAllCaps", catalog::is_all_caps);
predicate_handler!(is_lowercase, "isLowercase", catalog::is_lowercase);
predicate_handler!(is_boolean, "isBoolean", catalog::is_boolean);
predicate_handler!(is_email_address, "isEmailAddress", catalog::is_email_address);
predicate_handler!(is_phone_number, "isPhoneNumber", catalog::is_phone_number);
predicate_handler!(is_date, "isDate", catalog::is_date);
predicate_handler!(
    is_valid_state_code,
    "isValidStateCode",
    catalog::is_valid_state_code
);
