use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Field, Fields, ItemStruct, parse::Parser, parse_macro_input};

/// Implements `Payload` for an event struct, using the struct's name as the
/// event name.
#[proc_macro_derive(Event)]
pub fn event(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::event::Payload for #name #ty_generics #where_clause {
            fn get_name_static() -> &'static str {
                #name_str
            }

            fn get_name(&self) -> &'static str {
                #name_str
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }
    }
    .into()
}

/// Adds a `cancelled: bool` field to the struct and implements `Cancellable`
/// over it. Constructors must initialize the field with `cancelled: false`.
#[proc_macro_attribute]
pub fn cancellable(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[cancellable] does not take arguments",
        )
        .to_compile_error()
        .into();
    }

    let mut item_struct = parse_macro_input!(input as ItemStruct);
    let name = item_struct.ident.clone();
    let (impl_generics, ty_generics, where_clause) = item_struct.generics.split_for_impl();

    let Fields::Named(fields) = &mut item_struct.fields else {
        return syn::Error::new_spanned(
            &item_struct.ident,
            "#[cancellable] can only be used on structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let field = match Field::parse_named.parse2(quote! {
        /// Whether a handler has cancelled this event.
        cancelled: bool
    }) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };
    fields.named.push(field);

    quote! {
        #item_struct

        impl #impl_generics crate::event::Cancellable for #name #ty_generics #where_clause {
            fn cancelled(&self) -> bool {
                self.cancelled
            }

            fn set_cancelled(&mut self, cancelled: bool) {
                self.cancelled = cancelled;
            }
        }
    }
    .into()
}
