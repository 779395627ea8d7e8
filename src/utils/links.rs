// ============================================================================
// LINKS - Plantillas de URLs externas (explorador y marketplace)
// ============================================================================

/// Une una base con segmentos de ruta, sin duplicar barras
fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    url
}

/// URL del explorador para una transacción
pub fn explorer_tx_url(explorer_base: &str, tx_hash: &str) -> String {
    join_url(explorer_base, &[tx_hash])
}

/// URL del asset en el marketplace
pub fn marketplace_asset_url(marketplace_base: &str, contract_address: &str, token_id: u64) -> String {
    join_url(marketplace_base, &[contract_address, &token_id.to_string()])
}
