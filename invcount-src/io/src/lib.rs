inner::doc_inline_reexport! {
    input,
}
