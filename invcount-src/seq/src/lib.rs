inner::doc_inline_reexport! {
    inversion,
}
