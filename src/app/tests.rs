//! Tests for the per-request orchestrator.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};

    use crate::app::Application;
    use crate::dispatch::{Error, ParamSource, Payload, Renderable};
    use crate::http::{MediaType, Method, Request, Response, StatusCode};
    use crate::routing::{Route, RouteTable};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Widget {
        name: String,
    }

    impl Renderable for Widget {
        fn render(&self, media_type: &MediaType) -> Result<Vec<u8>, Error> {
            if media_type.is_compatible(&MediaType::new("application", "json")) {
                Ok(serde_json::to_vec(self)?)
            } else {
                Err(Error::MalformedRepresentation(format!(
                    "cannot render widget as {media_type}"
                )))
            }
        }

        fn unrender(content: &[u8], media_type: &MediaType) -> Result<Self, Error> {
            if media_type.is_compatible(&MediaType::new("application", "json")) {
                Ok(serde_json::from_slice(content)?)
            } else {
                Err(Error::MalformedRepresentation(format!(
                    "cannot unrender widget from {media_type}"
                )))
            }
        }
    }

    fn request(method: Method, path: &str) -> Request {
        Request::new(method, path, HashMap::new())
    }

    fn request_accepting(method: Method, path: &str, accept: &str) -> Request {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), accept.to_string());
        Request::new(method, path, headers)
    }

    #[tokio::test]
    async fn test_full_request_cycle() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, r"/users/{id:\d+}", |args, _ctx| async move {
                let id = args.get_str(0).unwrap_or("-").to_string();
                Ok(Payload::from(format!("user {id}")))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("text", "plain")])
            .with_binding(ParamSource::Path, "id"),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::GET, "/users/42")).await.unwrap();
        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(response.body, b"user 42");
        assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/users", |_args, _ctx| async {
                Ok(Payload::from("users"))
            })
            .unwrap(),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::GET, "/orders")).await.unwrap();
        assert_eq!(response.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn test_method_not_allowed_maps_to_405_with_allow_header() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/users", |_args, _ctx| async {
                Ok(Payload::from("users"))
            })
            .unwrap(),
        );
        table.add_route(
            Route::new(Method::PUT, "/users", |_args, _ctx| async {
                Ok(Payload::from("updated"))
            })
            .unwrap(),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::POST, "/users")).await.unwrap();
        assert_eq!(response.status, StatusCode::MethodNotAllowed);
        assert_eq!(response.headers.get("Allow").unwrap(), "GET, PUT");
    }

    #[tokio::test]
    async fn test_unsupported_media_type_maps_to_415() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::POST, "/users", |_args, _ctx| async {
                Ok(Payload::from("created"))
            })
            .unwrap()
            .with_consumes(vec![MediaType::new("application", "json")]),
        );
        let app = Application::new(table);

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());
        let response = app
            .run(Request::new(Method::POST, "/users", headers))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::UnsupportedMediaType);
    }

    #[tokio::test]
    async fn test_failed_negotiation_maps_to_406() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/report", |_args, _ctx| async {
                Ok(Payload::from("report"))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "json")]),
        );
        let app = Application::new(table);

        let response = app
            .run(request_accepting(Method::GET, "/report", "text/html"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::NotAcceptable);
    }

    #[tokio::test]
    async fn test_zero_quality_refusal_maps_to_406() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/report", |_args, _ctx| async {
                Ok(Payload::from("report"))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "json")]),
        );
        let app = Application::new(table);

        let response = app
            .run(request_accepting(
                Method::GET,
                "/report",
                "application/json;q=0",
            ))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::NotAcceptable);
    }

    #[tokio::test]
    async fn test_accept_header_selects_between_overloads() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/report", |_args, _ctx| async {
                Ok(Payload::from("json report"))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "json")]),
        );
        table.add_route(
            Route::new(Method::GET, "/report", |_args, _ctx| async {
                Ok(Payload::from("xml report"))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "xml")]),
        );
        let app = Application::new(table);

        let response = app
            .run(request_accepting(Method::GET, "/report", "application/xml"))
            .await
            .unwrap();
        assert_eq!(response.body, b"xml report");
        assert_eq!(
            response.headers.get("Content-Type").unwrap(),
            "application/xml"
        );
    }

    #[tokio::test]
    async fn test_no_accept_header_selects_first_registered() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/report", |_args, _ctx| async {
                Ok(Payload::from("json report"))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "json")]),
        );
        table.add_route(
            Route::new(Method::GET, "/report", |_args, _ctx| async {
                Ok(Payload::from("xml report"))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "xml")]),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::GET, "/report")).await.unwrap();
        assert_eq!(response.body, b"json report");
    }

    #[tokio::test]
    async fn test_selected_route_keeps_its_own_path_parameters() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/things/{a}", |args, _ctx| async move {
                Ok(Payload::from(format!(
                    "a={value}",
                    value = args.get_str(0).unwrap_or("-")
                )))
            })
            .unwrap()
            .with_binding(ParamSource::Path, "a"),
        );
        table.add_route(
            Route::new(Method::POST, "/things/{b}", |args, _ctx| async move {
                Ok(Payload::from(format!(
                    "b={value}",
                    value = args.get_str(0).unwrap_or("-")
                )))
            })
            .unwrap()
            .with_binding(ParamSource::Path, "b"),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::POST, "/things/7")).await.unwrap();
        assert_eq!(response.body, b"b=7");
    }

    #[tokio::test]
    async fn test_renderable_payload_uses_negotiated_media_type() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/widget", |_args, _ctx| async {
                Ok(Payload::renderable(Widget {
                    name: "sprocket".to_string(),
                }))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "json")]),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::GET, "/widget")).await.unwrap();
        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(
            response.headers.get("Content-Type").unwrap(),
            "application/json"
        );
        let widget: Widget = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(widget.name, "sprocket");
    }

    #[tokio::test]
    async fn test_render_failure_propagates() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/widget", |_args, _ctx| async {
                Ok(Payload::renderable(Widget {
                    name: "sprocket".to_string(),
                }))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("text", "csv")]),
        );
        let app = Application::new(table);

        let result = app.run(request(Method::GET, "/widget")).await;
        assert!(matches!(result, Err(Error::MalformedRepresentation(_))));
    }

    #[tokio::test]
    async fn test_response_payload_passes_through_unchanged() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::POST, "/users", |_args, _ctx| async {
                Ok(Payload::from(
                    Response::new(StatusCode::Created)
                        .with_content_type("text/plain")
                        .with_body_string("made"),
                ))
            })
            .unwrap()
            .with_produces(vec![MediaType::new("application", "json")]),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::POST, "/users")).await.unwrap();
        assert_eq!(response.status, StatusCode::Created);
        // the handler's own content type is not overwritten by negotiation
        assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
        assert_eq!(response.body, b"made");
    }

    #[tokio::test]
    async fn test_abort_response_becomes_the_result() {
        let mut table = RouteTable::new();
        table.add_route(
            Route::new(Method::GET, "/guarded", |_args, _ctx| async {
                Err(Error::Abort(
                    Response::new(StatusCode::Forbidden).with_body_string("denied"),
                ))
            })
            .unwrap(),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::GET, "/guarded")).await.unwrap();
        assert_eq!(response.status, StatusCode::Forbidden);
        assert_eq!(response.body, b"denied");
    }

    #[tokio::test]
    async fn test_base_path_end_to_end() {
        let mut table = RouteTable::new().with_base_path("/api/v1");
        table.add_route(
            Route::new(Method::GET, "/users/{id}", |args, _ctx| async move {
                Ok(Payload::from(args.get_str(0).unwrap_or("-").to_string()))
            })
            .unwrap()
            .with_binding(ParamSource::Path, "id"),
        );
        let app = Application::new(table);

        let response = app
            .run(request(Method::GET, "/api/v1/users/31"))
            .await
            .unwrap();
        assert_eq!(response.body, b"31");
    }

    #[tokio::test]
    async fn test_uri_info_reflects_base_path() {
        let mut table = RouteTable::new().with_base_path("/api");
        table.add_route(
            Route::new(Method::GET, "/ping", |_args, ctx| async move {
                Ok(Payload::from(format!(
                    "{base}|{path}|{absolute}",
                    base = ctx.uri_info.base_path(),
                    path = ctx.uri_info.path(),
                    absolute = ctx.uri_info.absolute_path()
                )))
            })
            .unwrap(),
        );
        let app = Application::new(table);

        let response = app.run(request(Method::GET, "/api/ping")).await.unwrap();
        assert_eq!(response.body, b"/api|/ping|/api/ping");
    }
}
