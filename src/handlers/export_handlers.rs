use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::export;
use crate::models::filter::{EntityKind, FilterQuery, FilterSpec, filter_records};
use crate::state::{SharedStore, ensure_loaded};
use crate::templates_structs::PageContext;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /export — download the currently filtered view as a spreadsheet.
/// Always the filtered rows, never the whole collection.
pub async fn download(
    api: web::Data<ApiClient>,
    store: web::Data<SharedStore>,
    session: Session,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ensure_loaded(&store, &api, &ctx.admin_id).await?;

    let kind = EntityKind::from_param(query.kind.as_deref());
    let spec = FilterSpec::from_query(&query);

    let s = store.read().await;
    let (buffer, base) = match kind {
        EntityKind::Candidates => {
            let rows = filter_records(&s.candidates.records, &spec);
            (export::candidates_workbook(&rows)?, "workforce_candidates")
        }
        EntityKind::Companies => {
            let rows = filter_records(&s.companies.records, &spec);
            (export::companies_workbook(&rows)?, "workforce_companies")
        }
    };
    drop(s);

    let filename = export::export_filename(base);
    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(buffer))
}
