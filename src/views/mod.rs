//! Páginas HTML
//!
//! Presentación mínima sin motor de plantillas: cada página es un `String`.
//! Todo texto que viene del usuario o de la base pasa por `escape`.

use crate::dto::VehicleForm;
use crate::middleware::flash::Flash;
use crate::models::VehicleView;

/// Datos de la página `/info`
#[derive(Debug)]
pub struct InfoPage<'a> {
    pub db_ok: bool,
    pub db_address: String,
    pub database: &'a str,
    pub user: &'a str,
    pub namespace: &'a str,
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let notice = flash
        .map(|f| format!(r#"<div class="flash {}">{}</div>"#, f.kind.as_str(), escape(&f.message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>{title} - FIAT</title></head>
<body>
<h1>FIAT - Gestão de Veículos</h1>
{notice}
{body}
</body>
</html>"#,
        title = escape(title),
        notice = notice,
        body = body,
    )
}

pub fn vehicle_list(vehicles: &[VehicleView], flash: Option<&Flash>) -> String {
    let rows: String = vehicles
        .iter()
        .map(|v| {
            format!(
                r#"<tr><td>{id}</td><td>{modelo}</td><td>{ano}</td><td>{cor}</td><td>{preco}</td><td>{data}</td><td>{disp}</td><td><a href="/vehicle/edit/{id}">Editar</a> <a href="/vehicle/delete/{id}">Deletar</a></td></tr>"#,
                id = v.id,
                modelo = escape(&v.modelo),
                ano = v.ano,
                cor = escape(&v.cor),
                preco = v.preco,
                data = escape(&v.data_fabricacao),
                disp = if v.disponivel { "Sim" } else { "Não" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let table = if vehicles.is_empty() {
        "<p>Nenhum veículo cadastrado.</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>ID</th><th>Modelo</th><th>Ano</th><th>Cor</th><th>Preço</th><th>Data de Fabricação</th><th>Disponível</th><th></th></tr>\n{}\n</table>",
            rows
        )
    };

    layout(
        "Veículos",
        flash,
        &format!(r#"<p><a href="/vehicle/new">Novo Veículo</a></p>{}"#, table),
    )
}

/// Formulario de alta (`id = None`) o edición
pub fn vehicle_form(id: Option<i32>, form: &VehicleForm, flash: Option<&Flash>) -> String {
    let (title, action) = match id {
        Some(id) => ("Editar Veículo".to_string(), format!("/vehicle/edit/{}", id)),
        None => ("Novo Veículo".to_string(), "/vehicle/new".to_string()),
    };
    let checked = if form.disponivel.unwrap_or(false) { " checked" } else { "" };

    let body = format!(
        r#"<h2>{title}</h2>
<form method="post" action="{action}">
<label>Modelo <input name="modelo" value="{modelo}" required></label>
<label>Ano <input name="ano" type="number" value="{ano}" required></label>
<label>Cor <input name="cor" value="{cor}" required></label>
<label>Preço <input name="preco" type="number" step="0.01" value="{preco}" required></label>
<label>Data de Fabricação <input name="data_fabricacao" type="date" value="{data}" required></label>
<label>Disponível <input name="disponivel" type="checkbox"{checked}></label>
<button type="submit">Salvar</button>
</form>
<p><a href="/">Voltar</a></p>"#,
        title = title,
        action = action,
        modelo = escape(&form.modelo),
        ano = escape(&form.ano),
        cor = escape(&form.cor),
        preco = escape(&form.preco),
        data = escape(&form.data_fabricacao),
        checked = checked,
    );

    layout(&title, flash, &body)
}

pub fn info_page(info: &InfoPage<'_>) -> String {
    format!(
        r#"
    <h1>FIAT - Sistema Legado Modernizado</h1>
    <p><strong>Status do Banco:</strong> {status}</p>
    <p><strong>Host do Banco:</strong> {address}</p>
    <p><strong>Database:</strong> {database}</p>
    <p><strong>Usuário:</strong> {user}</p>
    <p><strong>OpenShift Project:</strong> {namespace}</p>
    <a href="/">Voltar para a aplicação</a>
    "#,
        status = if info.db_ok { "OK" } else { "ERROR" },
        address = escape(&info.db_address),
        database = escape(info.database),
        user = escape(info.user),
        namespace = escape(info.namespace),
    )
}
