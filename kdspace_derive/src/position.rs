pub fn impl_position(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;

    let (member, position_ty) = match &input.data {
        syn::Data::Struct(data_struct) => crate::find_field("position", data_struct)
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    &data_struct.fields,
                    "no `position` field or field marked with `#[position]`",
                )
            }),
        syn::Data::Enum(data_enum) => Err(syn::Error::new_spanned(
            data_enum.enum_token,
            "the `Position` trait can only be derived for struct types",
        )),
        syn::Data::Union(_) => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "the `Position` trait can only be derived for struct types",
        )),
    }?;
    let position_ty = position_ty.clone();

    input
        .generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! {
            #position_ty: Position
        });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &input.ident;

    Ok(quote::quote! {
        impl #impl_generics Position for #name #ty_generics #where_clause {
            type Scalar = <#position_ty as Position>::Scalar;

            #[inline]
            fn coordinate(&self, axis: usize) -> Self::Scalar {
                Position::coordinate(&self.#member, axis)
            }

            #[inline]
            fn dimension(&self) -> usize {
                Position::dimension(&self.#member)
            }
        }
    }
    .into())
}
