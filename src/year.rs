use js_sys::Date;
use web_sys::Document;

use crate::dom;

const YEAR_ID: &str = "year";

pub(crate) fn install(document: &Document) -> Result<(), String> {
    let Some(element) = dom::by_id(document, YEAR_ID) else {
        return Ok(());
    };
    let year = Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
    Ok(())
}
