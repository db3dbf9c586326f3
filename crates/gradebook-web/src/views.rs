//! HTML pages.
//!
//! Every page is rendered through [`page`], which wraps the body in the shared
//! layout and stylesheet. User-provided text must go through `encode_text`.

use gradebook_core::{SUBJECT_COUNT, StudentRecord};
use html_escape::encode_text;
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background: #f0f8ff; }
.box { width: 400px; margin: auto; padding: 30px; background: white; border-radius: 20px;
       box-shadow: 0px 4px 10px rgba(0,0,0,0.2); text-align: center; margin-top: 50px; }
input { padding: 10px; margin: 10px 0; width: 90%; border: 1px solid #ccc; border-radius: 8px; }
button { padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 8px; }
button:hover { background: #0056b3; }
.error { color: red; }
";

pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title><style>{}</style></head>\n\
         <body><div class=\"box\">\n{}</div></body></html>\n",
        encode_text(title),
        STYLE,
        body
    )
}

fn error_line(error: Option<&str>) -> String {
    error
        .map(|e| format!("<p class=\"error\">{}</p>\n", encode_text(e)))
        .unwrap_or_default()
}

pub fn login(error: Option<&str>) -> String {
    let body = format!(
        "<h2>Login</h2>\n\
         <form method=\"POST\">\n\
         <input type=\"text\" name=\"username\" placeholder=\"Username\" required><br>\n\
         <input type=\"password\" name=\"password\" placeholder=\"Password\" required><br>\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n{}",
        error_line(error)
    );
    page("Login", &body)
}

pub fn admin_dashboard(students: &[StudentRecord], error: Option<&str>) -> String {
    let mut items = String::new();
    for student in students {
        let _ = writeln!(
            items,
            "<li>{} - Overall Grade: {}</li>",
            encode_text(&student.username),
            student.overall_label()
        );
    }

    let body = format!(
        "<h2>Admin Dashboard</h2>\n\
         <form method=\"POST\" action=\"/create_user\">\n\
         <input type=\"text\" name=\"username\" placeholder=\"Student Username\" required><br>\n\
         <input type=\"password\" name=\"password\" placeholder=\"Password\" required><br>\n\
         <button type=\"submit\">Create Student</button>\n\
         </form>\n{}\
         <h3>Registered Students</h3>\n<ul>\n{}</ul>\n\
         <a href=\"/logout\">Logout</a>\n",
        error_line(error),
        items
    );
    page("Admin Dashboard", &body)
}

pub fn student_dashboard() -> String {
    let mut inputs = String::new();
    for i in 1..=SUBJECT_COUNT {
        let _ = writeln!(
            inputs,
            "<input type=\"number\" name=\"subject{i}\" placeholder=\"Subject {i} Marks\" step=\"any\" required><br>"
        );
    }

    let body = format!(
        "<h2>Enter Your Subject Marks</h2>\n\
         <form method=\"POST\" action=\"/calculate\">\n{}\
         <button type=\"submit\">Calculate Grades</button>\n\
         </form>\n\
         <a href=\"/logout\">Logout</a>\n",
        inputs
    );
    page("Student Dashboard", &body)
}

/// Whole-number scores keep one decimal place ("90.0"), others print as entered
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

pub fn grade_report(student: &StudentRecord) -> String {
    let mut rows = String::new();
    for g in &student.grades {
        let _ = writeln!(
            rows,
            "<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>",
            encode_text(&g.subject),
            format_score(g.score),
            g.grade,
            g.point
        );
    }

    let body = format!(
        "<h2>Grade Report: {}</h2>\n\
         <table border=\"1\" style=\"margin:auto\">\n\
         <tr><th>Subject</th><th>Score</th><th>Grade</th><th>Grade Point</th></tr>\n{}\
         </table>\n\
         <h3>Overall Grade: {}</h3>\n\
         <a href=\"/logout\">Logout</a>\n",
        encode_text(&student.username),
        rows,
        student.overall_label()
    );
    page("Result", &body)
}
