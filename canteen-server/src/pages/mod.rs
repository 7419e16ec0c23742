//! HTML pages
//!
//! Deliberately plain markup: the form, the confirmation and the staff
//! board. Every interpolated value goes through [`escape`].

use std::fmt::Write;

use shared::models::{MenuEntry, Order};

/// Escape text for use inside HTML element content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Student order form, optionally with an error banner
pub fn order_form(menu: &[MenuEntry], error: Option<&str>) -> String {
    let mut body = String::from("<h1>School Canteen</h1>\n");
    if let Some(error) = error {
        let _ = writeln!(body, "<p class=\"error\" role=\"alert\">{}</p>", escape(error));
    }
    body.push_str(
        "<form method=\"post\" action=\"/order\">\n\
         <label>Name <input name=\"name\" required></label>\n\
         <label>Class / Section <input name=\"class_section\" required></label>\n\
         <label>Item <select name=\"item\" required>\n",
    );
    for entry in menu {
        let _ = writeln!(
            body,
            "<option value=\"{}\">{} - Rs {}</option>",
            entry.index,
            escape(&entry.name),
            entry.price
        );
    }
    body.push_str("</select></label>\n<button type=\"submit\">Place order</button>\n</form>");
    layout("School Canteen", &body)
}

/// Confirmation page shown after a successful order
pub fn order_success(order: &Order) -> String {
    let body = format!(
        "<h1>Order placed</h1>\n\
         <p>Your order number is <strong>{}</strong>.</p>\n\
         <dl>\n<dt>Name</dt><dd>{}</dd>\n<dt>Class</dt><dd>{}</dd>\n\
         <dt>Item</dt><dd>{}</dd>\n<dt>Price</dt><dd>Rs {}</dd>\n\
         <dt>Placed at</dt><dd>{} UTC</dd>\n</dl>\n\
         <p><a href=\"/\">Place another order</a></p>",
        escape(&order.order_number),
        escape(&order.student_name),
        escape(&order.class_section),
        escape(&order.item_name),
        order.price,
        order.created_at.format("%Y-%m-%d %H:%M"),
    );
    layout("Order placed", &body)
}

/// Staff board; the order list is fetched client-side with the staff key
pub fn staff_page() -> String {
    let body = "<h1>Staff</h1>\n\
        <form id=\"key-form\"><label>Staff key <input id=\"key\" type=\"password\"></label>\
        <button type=\"submit\">Load orders</button></form>\n\
        <p id=\"status\"></p>\n\
        <table id=\"orders\"><thead><tr><th>Order</th><th>Name</th><th>Class</th>\
        <th>Item</th><th>Price</th><th>Time</th></tr></thead><tbody></tbody></table>\n\
        <script>\n\
        document.getElementById('key-form').addEventListener('submit', async (e) => {\n\
          e.preventDefault();\n\
          const key = document.getElementById('key').value;\n\
          const res = await fetch('/api/orders?key=' + encodeURIComponent(key));\n\
          const status = document.getElementById('status');\n\
          const tbody = document.querySelector('#orders tbody');\n\
          tbody.replaceChildren();\n\
          if (!res.ok) { status.textContent = res.status === 401 ? 'Wrong key' : 'Failed to load'; return; }\n\
          const { orders } = await res.json();\n\
          status.textContent = orders.length + ' orders';\n\
          for (const o of orders) {\n\
            const tr = document.createElement('tr');\n\
            for (const v of [o.order_number, o.student_name, o.class_section, o.item_name, o.price, o.created_at]) {\n\
              const td = document.createElement('td'); td.textContent = v; tr.appendChild(td);\n\
            }\n\
            tbody.appendChild(tr);\n\
          }\n\
        });\n\
        </script>";
    layout("Staff", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_order_form_lists_menu_and_error() {
        let menu = vec![MenuEntry {
            index: 0,
            name: "Idli (2 pcs)".into(),
            price: 35,
        }];
        let html = order_form(&menu, Some("Fill all fields"));
        assert!(html.contains("<option value=\"0\">Idli (2 pcs) - Rs 35</option>"));
        assert!(html.contains("Fill all fields"));
        assert!(!order_form(&menu, None).contains("role=\"alert\""));
    }

    #[test]
    fn test_order_success_escapes_student_input() {
        let order = Order {
            id: 7,
            order_number: "20240115-0007".into(),
            student_name: "<script>alert(1)</script>".into(),
            class_section: "8B".into(),
            item_name: "Masala Dosa".into(),
            price: 80,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        };
        let html = order_success(&order);
        assert!(html.contains("20240115-0007"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("2024-01-15 10:00 UTC"));
    }
}
