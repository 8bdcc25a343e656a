use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::errors::{AppError, render};
use crate::models::filter::{EntityKind, FilterQuery, FilterSpec, filter_records};
use crate::models::stats;
use crate::state::{SharedStore, ensure_loaded};
use crate::templates_structs::{DashboardTemplate, PageContext};

pub async fn index(
    api: web::Data<ApiClient>,
    store: web::Data<SharedStore>,
    session: Session,
    query: web::Query<FilterQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    let notices = ensure_loaded(&store, &api, &ctx.admin_id).await?;

    let kind = EntityKind::from_param(query.kind.as_deref());
    let spec = FilterSpec::from_query(&query);

    // Row actions land back on this exact view, filters included.
    let redirect_to = if req.query_string().is_empty() {
        "/dashboard".to_string()
    } else {
        format!("/dashboard?{}", req.query_string())
    };

    let s = store.read().await;
    let tmpl = match kind {
        EntityKind::Candidates => {
            let all = &s.candidates.records;
            let rows: Vec<_> = filter_records(all, &spec).into_iter().cloned().collect();
            DashboardTemplate {
                counts: stats::status_counts(all),
                categories: stats::distinct_categories(all),
                locations: stats::distinct_locations(all),
                histogram: stats::category_histogram(all),
                status_slices: stats::status_breakdown(all),
                filtered_total: rows.len(),
                candidates: rows,
                companies: Vec::new(),
                ctx,
                kind,
                spec,
                notices,
                redirect_to,
            }
        }
        EntityKind::Companies => {
            let all = &s.companies.records;
            let rows: Vec<_> = filter_records(all, &spec).into_iter().cloned().collect();
            DashboardTemplate {
                counts: stats::status_counts(all),
                categories: stats::distinct_categories(all),
                locations: stats::distinct_locations(all),
                histogram: stats::category_histogram(all),
                status_slices: stats::status_breakdown(all),
                filtered_total: rows.len(),
                candidates: Vec::new(),
                companies: rows,
                ctx,
                kind,
                spec,
                notices,
                redirect_to,
            }
        }
    };
    drop(s);

    render(tmpl)
}
