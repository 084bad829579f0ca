//! Server-rendered HTML pages. All values coming from the database or the user pass
//! through [`escape`].
use chrono::NaiveDate;
use personnel::date::{format_month_label, NO_DATE_LABEL};
use personnel::types::{Department, EmployeeRecord, EmployeeSummary, Position};

use crate::flash::Flash;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:4px 8px}\
.flash{padding:8px;margin-bottom:1em}.flash-success{background:#dfd}\
.flash-error{background:#fdd}.flash-info{background:#ddf}";

/// Escapes text for use in element content and quoted attribute values
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn label(value: Option<&str>) -> String {
    escape(value.unwrap_or(NO_DATE_LABEL))
}

fn date(value: Option<NaiveDate>) -> String {
    value.map_or_else(|| NO_DATE_LABEL.to_string(), |d| d.to_string())
}

fn layout(title: &str, flash: Option<&Flash>, content: &str) -> String {
    let flash = flash.map_or_else(String::new, |f| {
        format!(
            "<div class=\"flash flash-{}\">{}</div>",
            f.level,
            escape(&f.message)
        )
    });
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Сотрудники</a> | <a href=\"/employee/add\">Добавить сотрудника</a></nav>\n\
         {flash}\n<h1>{title}</h1>\n{content}\n</body>\n</html>\n",
        title = escape(title),
    )
}

#[must_use]
pub fn employee_list_page(employees: &[EmployeeSummary], flash: Option<&Flash>) -> String {
    let rows: String = employees
        .iter()
        .map(|e| {
            format!(
                "<tr><td>{id}</td><td><a href=\"/employee/{id}\">{last} {first}</a></td>\
                 <td>{phone}</td><td>{position}</td><td>{department}</td>\
                 <td><form method=\"post\" action=\"/delete/{id}\">\
                 <button type=\"submit\">Удалить</button></form></td></tr>\n",
                id = e.employee_id,
                last = escape(&e.last_name),
                first = escape(&e.first_name),
                phone = label(e.phone.as_deref()),
                position = label(e.position_name.as_deref()),
                department = label(e.department_name.as_deref()),
            )
        })
        .collect();

    let content = if employees.is_empty() {
        "<p>Сотрудников пока нет.</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>№</th><th>Сотрудник</th><th>Телефон</th><th>Должность</th>\
             <th>Отдел</th><th></th></tr>\n{rows}</table>"
        )
    };
    layout("Сотрудники", flash, &content)
}

fn options<'a>(items: impl Iterator<Item = (i64, &'a str)>) -> String {
    let mut html = "<option value=\"\">Не выбрано</option>".to_string();
    for (id, text) in items {
        html.push_str(&format!("<option value=\"{id}\">{}</option>", escape(text)));
    }
    html
}

#[must_use]
pub fn add_employee_page(
    positions: &[Position],
    departments: &[Department],
    flash: Option<&Flash>,
) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/employee/add\">\n\
         <p><label>Имя <input name=\"first_name\" required></label></p>\n\
         <p><label>Фамилия <input name=\"last_name\" required></label></p>\n\
         <p><label>Дата рождения <input type=\"date\" name=\"birth_date\"></label></p>\n\
         <p><label>Телефон <input name=\"phone\"></label></p>\n\
         <p><label>Email <input type=\"email\" name=\"email\"></label></p>\n\
         <p><label>Дата приёма <input type=\"date\" name=\"hire_date\"></label></p>\n\
         <p><label>Должность <select name=\"position_id\">{positions}</select></label></p>\n\
         <p><label>Отдел <select name=\"department_id\">{departments}</select></label></p>\n\
         <p><button type=\"submit\">Сохранить</button></p>\n</form>",
        positions = options(positions.iter().map(|p| (p.position_id, p.title.as_str()))),
        departments = options(departments.iter().map(|d| (d.department_id, d.name.as_str()))),
    );
    layout("Новый сотрудник", flash, &content)
}

#[must_use]
pub fn add_salary_page(employee_id: i64, flash: Option<&Flash>) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/employee/{employee_id}/salary/add\">\n\
         <p><label>Сумма <input type=\"number\" step=\"0.01\" min=\"0\" name=\"amount\"></label></p>\n\
         <p><label>Месяц <input type=\"month\" name=\"salary_month\"></label></p>\n\
         <p><button type=\"submit\">Сохранить</button> \
         <a href=\"/employee/{employee_id}\">Назад</a></p>\n</form>"
    );
    layout("Добавить зарплату", flash, &content)
}

#[must_use]
pub fn add_vacation_page(employee_id: i64, flash: Option<&Flash>) -> String {
    let content = format!(
        "<form method=\"post\" action=\"/employee/{employee_id}/vacation/add\">\n\
         <p><label>С <input type=\"date\" name=\"from_date\"></label></p>\n\
         <p><label>По <input type=\"date\" name=\"to_date\"></label></p>\n\
         <p><button type=\"submit\">Сохранить</button> \
         <a href=\"/employee/{employee_id}\">Назад</a></p>\n</form>"
    );
    layout("Добавить отпуск", flash, &content)
}

#[must_use]
pub fn employee_page(record: &EmployeeRecord, flash: Option<&Flash>) -> String {
    let e = &record.employee;
    let mut content = format!(
        "<table>\n\
         <tr><th>Дата рождения</th><td>{birth}</td></tr>\n\
         <tr><th>Дата приёма</th><td>{hired}</td></tr>\n\
         <tr><th>Телефон</th><td>{phone}</td></tr>\n\
         <tr><th>Email</th><td>{email}</td></tr>\n\
         <tr><th>Должность</th><td>{position}</td></tr>\n\
         <tr><th>Отдел</th><td>{department}</td></tr>\n</table>\n",
        birth = date(e.birth_date),
        hired = date(e.hire_date),
        phone = label(e.phone.as_deref()),
        email = label(e.email.as_deref()),
        position = label(e.position_name.as_deref()),
        department = label(e.department_name.as_deref()),
    );

    content.push_str(&format!(
        "<h2>Зарплаты</h2>\n<p><a href=\"/employee/{}/salary/add\">Добавить зарплату</a></p>\n",
        e.employee_id
    ));
    if record.salaries.is_empty() {
        content.push_str("<p>Нет записей.</p>\n");
    } else {
        content.push_str("<table>\n<tr><th>Месяц</th><th>Сумма</th></tr>\n");
        for salary in &record.salaries {
            content.push_str(&format!(
                "<tr><td>{}</td><td>{:.2}</td></tr>\n",
                escape(&format_month_label(Some(salary.from_date))),
                salary.amount
            ));
        }
        content.push_str("</table>\n");
    }

    content.push_str(&format!(
        "<h2>Отпуска</h2>\n<p><a href=\"/employee/{}/vacation/add\">Добавить отпуск</a></p>\n",
        e.employee_id
    ));
    if record.vacations.is_empty() {
        content.push_str("<p>Нет записей.</p>\n");
    } else {
        content.push_str("<table>\n<tr><th>С</th><th>По</th></tr>\n");
        for vacation in &record.vacations {
            content.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                vacation.start_date, vacation.end_date
            ));
        }
        content.push_str("</table>\n");
    }

    content.push_str(&format!(
        "<form method=\"post\" action=\"/delete/{}\">\
         <button type=\"submit\">Удалить сотрудника</button></form>",
        e.employee_id
    ));

    layout(&e.full_name(), flash, &content)
}

#[must_use]
pub fn not_found_page() -> String {
    layout(
        "Страница не найдена",
        None,
        "<p><a href=\"/\">К списку сотрудников</a></p>",
    )
}

#[must_use]
pub fn internal_error_page() -> String {
    layout(
        "Внутренняя ошибка сервера",
        None,
        "<p>Запрос не удалось выполнить.</p>",
    )
}
