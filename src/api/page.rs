//! HTML rendering for the chat page

use crate::rag::ChatReply;

pub const PAGE_TITLE: &str = "RAG Chatbot";

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-bottom:.25rem}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}\
.error{background:#fde8e8;color:#9b1c1c;padding:.75rem;border-radius:.25rem;margin-top:1rem}\
.answer{white-space:pre-wrap;margin-top:1rem}";

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
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

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{PAGE_TITLE}</h1>\n{body}</body>\n</html>\n"
    )
}

/// The chat page: one input, and the reply to the submitted input if any
pub fn render_chat_page(user_input: &str, reply: Option<&ChatReply>) -> String {
    let mut body = format!(
        "<form method=\"get\" action=\"/\">\n\
         <label for=\"user_input\">You:</label>\n\
         <input type=\"text\" id=\"user_input\" name=\"user_input\" value=\"{}\" autofocus>\n\
         </form>\n",
        escape_html(user_input)
    );

    if let Some(reply) = reply {
        if let Some(notice) = &reply.notice {
            body.push_str(&format!(
                "<div class=\"error\" role=\"alert\">{}</div>\n",
                escape_html(notice)
            ));
        }
        body.push_str(&format!(
            "<p class=\"answer\">Bot: {}</p>\n",
            escape_html(&reply.answer)
        ));
    }

    layout(&body)
}

/// Generic failure page for errors the pipeline does not handle
pub fn render_error_page(message: &str) -> String {
    layout(&format!(
        "<div class=\"error\" role=\"alert\">Something went wrong: {}</div>\n\
         <p><a href=\"/\">Back</a></p>\n",
        escape_html(message)
    ))
}
