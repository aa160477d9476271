//! Root redirect and the static endpoint reference it points at.
//!
//! Neither path requires the API key.

use axum::response::{Html, Redirect};

/// `GET /`
pub async fn root_redirect() -> Redirect {
  Redirect::temporary("/api/docs")
}

/// `GET /api/docs`
pub async fn endpoint_reference() -> Html<&'static str> {
  Html(ENDPOINTS)
}

const ENDPOINTS: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>orgbook API</title></head>
<body>
<h1>orgbook API</h1>
<p>All endpoints below require the <code>X-API-Key</code> header.</p>
<table border="1" cellpadding="4">
<tr><th>Method</th><th>Path</th><th>Description</th></tr>
<tr><td>GET</td><td>/buildings/{building_id}/organizations</td>
    <td>Organizations in a building</td></tr>
<tr><td>GET</td><td>/activities/{activity_id}/organizations</td>
    <td>Organizations directly tagged with an activity</td></tr>
<tr><td>GET</td><td>/organizations/nearby?lat=&amp;lon=&amp;radius=1000</td>
    <td>Organizations within a radius (meters)</td></tr>
<tr><td>GET</td><td>/organizations/{org_id}</td>
    <td>One organization</td></tr>
<tr><td>GET</td><td>/organizations/search/activity?activity_name=</td>
    <td>Search by activity subtree (root name, descendants included)</td></tr>
<tr><td>GET</td><td>/organizations/search/name?name=</td>
    <td>Search by name substring</td></tr>
<tr><td>POST</td><td>/organizations/</td>
    <td>Create an organization</td></tr>
</table>
</body>
</html>
"#;
