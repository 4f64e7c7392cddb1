//! Fixed templates for the three generated artifacts.

use crate::core::latex::{escape, join_keywords};
use crate::core::metadata::ThesisMetadata;

/// Render the thesis class macro definitions. Free-text fields are LaTeX-escaped.
pub fn render_macros(metadata: &ThesisMetadata, source_name: &str) -> String {
    let title = escape(&metadata.title);
    let author = escape(&metadata.author);
    let supervisor = escape(&metadata.supervisor);
    let advisor = escape(&metadata.advisor);
    let date = &metadata.date;
    let degree = escape(&metadata.degree);
    let school = escape(&metadata.school);
    let department = escape(&metadata.department);
    let program = escape(&metadata.program);
    let major = escape(&metadata.major);
    let license = escape(&metadata.license);
    let year = metadata.year();
    let keywords = join_keywords(metadata.keywords.iter().map(String::as_str));

    format!(
        r"% Auto-generated from {source_name}
% Do not edit manually - regenerate with thesis-metadata

\thesistitle{{{title}}}
\author{{{author}}}
\thesisauthor{{{author}}}
\supervisor{{{supervisor}}}
\advisor{{{advisor}}}
\date{{{date}}}

% Thesis class requirements
\univdegree{{{degree}}}
\school{{{school}}}
\department{{{department}}}
\degreeprogram{{{program}}}
\major{{{major}}}
\collaborativepartner{{}}
\uselogo{{aalto!}}

% Copyright and keywords
\copyrighttext{{\noexpand\textcopyright\ {year}. {author}. This work is licensed under {license}.}}{{\noindent\textcopyright\ {year}\ {author}. This work is licensed under {license}.}}
\keywords{{{keywords}}}
"
    )
}

/// Render the `.xmpdata` block read by pdfx. Values are written raw.
pub fn render_xmpdata(metadata: &ThesisMetadata) -> String {
    let title = &metadata.title;
    let author = &metadata.author;
    let year = metadata.year();
    let keywords = metadata.keywords_text();

    format!(
        r"\Title {{{title}}}
\Author {{{author}}}
\Language {{en}}
\Copyright {{© {year} {author}}}
\CopyrightURL {{}}
\Subject {{thesis}}
\Keywords {{{keywords}}}
"
    )
}

/// Render the abstract as one escaped line.
pub fn render_abstract(metadata: &ThesisMetadata) -> String {
    format!("{}\n", escape(&metadata.abstract_text))
}
