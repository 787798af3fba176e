//! Built-in classification of Scheme syntactic keywords.
//!
//! Covers the R5RS syntax forms plus the common R7RS additions. Procedures
//! are absent: they indent with [`IndentPolicy::Default`].

use crate::IndentPolicy::{self, Binding, Branch, Definition, Sequence};

pub(crate) const SCHEME_KEYWORDS: &[(&str, IndentPolicy)] = &[
    // Definitions and procedure bodies
    ("define", Definition),
    ("define-syntax", Definition),
    ("define-record-type", Definition),
    ("define-values", Definition),
    ("lambda", Definition),
    ("case-lambda", Definition),
    ("let-syntax", Definition),
    ("letrec-syntax", Definition),
    // Plain sequences
    ("begin", Sequence),
    ("delay", Sequence),
    ("dynamic-wind", Sequence),
    // Conditionals
    ("if", Branch),
    // Binding header followed by a body
    ("let", Binding { threshold: 1 }),
    ("let*", Binding { threshold: 1 }),
    ("letrec", Binding { threshold: 1 }),
    ("letrec*", Binding { threshold: 1 }),
    ("let-values", Binding { threshold: 1 }),
    ("let*-values", Binding { threshold: 1 }),
    ("fluid-let", Binding { threshold: 1 }),
    ("parameterize", Binding { threshold: 1 }),
    ("when", Binding { threshold: 1 }),
    ("unless", Binding { threshold: 1 }),
    ("case", Binding { threshold: 1 }),
    ("guard", Binding { threshold: 1 }),
    ("syntax-rules", Binding { threshold: 1 }),
    ("do", Binding { threshold: 2 }),
    ("call-with-input-file", Binding { threshold: 1 }),
    ("call-with-output-file", Binding { threshold: 1 }),
    ("with-input-from-file", Binding { threshold: 1 }),
    ("with-output-to-file", Binding { threshold: 1 }),
];
