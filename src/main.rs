#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};

    use brochure::frontend;

    dotenvy::dotenv().ok();
    env_logger::init();

    let conf = get_configuration(None).expect("Invalid leptos configuration");
    let addr = conf.leptos_options.site_addr;
    log::info!("brochure listening on http://{addr}");

    HttpServer::new(move || {
        let routes = generate_route_list(frontend::App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || frontend::shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client builds mount through `brochure::hydrate`.
}
